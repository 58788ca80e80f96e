pub(crate) mod missing_final_newline;
