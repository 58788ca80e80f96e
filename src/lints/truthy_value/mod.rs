pub(crate) mod truthy_value;
