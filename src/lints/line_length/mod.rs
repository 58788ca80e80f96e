pub(crate) mod line_length;
