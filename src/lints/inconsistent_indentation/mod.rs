pub(crate) mod inconsistent_indentation;
