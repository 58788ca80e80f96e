pub(crate) mod colon_spacing;
