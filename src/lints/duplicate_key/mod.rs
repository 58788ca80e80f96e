pub(crate) mod duplicate_key;
