pub(crate) mod pretty_formatting;
