pub(crate) mod colon_spacing;
pub(crate) mod duplicate_key;
pub(crate) mod inconsistent_indentation;
pub(crate) mod line_length;
pub(crate) mod missing_final_newline;
pub(crate) mod pretty_formatting;
pub(crate) mod tab_indentation;
pub(crate) mod trailing_whitespace;
pub(crate) mod truthy_value;
