//! Encodes filter state into the listing endpoint's query string.

use crate::filter_state::{FilterField, FilterFlag, FilterState};

/// Key/value pairs for every set field, in a stable order. Unset fields and
/// flags are left out entirely so the server does not filter on them.
pub fn filter_query_pairs(filters: &FilterState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    for field in FilterField::ALL {
        let value = filters.input_value(field);
        if !value.is_empty() {
            pairs.push((field.key(), value));
        }
    }
    for flag in FilterFlag::ALL {
        if filters.is_flag_set(flag) {
            pairs.push((flag.key(), "true".to_string()));
        }
    }
    pairs
}

pub fn encode_filter_query(filters: &FilterState) -> Result<String, serde_urlencoded::ser::Error> {
    serde_urlencoded::to_string(filter_query_pairs(filters))
}
