//! Group header labels.

use dupview_model::{GroupHeader, HeaderValue, Record};

use crate::filters::ActiveFilterSet;

/// Summarises the record's value for every active filter, e.g.
/// `size: large, noOfToppings: 2`.
pub fn build_label(record: &Record, filters: &ActiveFilterSet) -> String {
    let last = filters.last_active();
    let mut label = String::new();
    for name in filters.iter() {
        let value = record.display_value(name);
        if Some(name) == last {
            label.push_str(&format!("{name}: {value} "));
        } else {
            label.push_str(&format!("{name}: {value}, "));
        }
    }
    label.trim().to_string()
}

/// Builds the header for a run whose first record is `record`.
pub fn build_header(record: &Record, filters: &ActiveFilterSet) -> GroupHeader {
    let values = filters
        .iter()
        .map(|name| HeaderValue::new(name, record.get(name).cloned()))
        .collect();
    GroupHeader::new(build_label(record, filters), values)
}
