pub(crate) mod tab_indentation;
