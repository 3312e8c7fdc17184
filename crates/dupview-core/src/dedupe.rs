//! Duplicate detection over the active filter attributes.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use dupview_model::Record;

use crate::filters::ActiveFilterSet;

/// Keys that never count as duplicates.
const EXCLUDED_KEYS: [&str; 2] = ["", "null"];

/// Concatenates the record's value for each active filter, in activation order.
pub fn composite_key(record: &Record, filters: &ActiveFilterSet) -> String {
    let mut key = String::new();
    for name in filters.iter() {
        key.push_str(&record.display_value(name));
    }
    key
}

fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key)
}

/// Tallies how many records share each composite key.
///
/// Excluded keys (empty or `null`) are not counted.
pub fn key_frequencies(records: &[Record], filters: &ActiveFilterSet) -> BTreeMap<String, usize> {
    let mut tracker: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let key = composite_key(record, filters);
        trace!(record = record.id.0, key = %key, "composite key");
        if is_excluded(&key) {
            continue;
        }
        *tracker.entry(key).or_insert(0) += 1;
    }
    tracker
}

/// Keeps the records whose composite key is shared with at least one other
/// record, preserving input order.
pub fn retain_duplicates(records: &[Record], filters: &ActiveFilterSet) -> Vec<Record> {
    if records.is_empty() || filters.is_empty() {
        return Vec::new();
    }
    let tracker = key_frequencies(records, filters);
    let retained: Vec<Record> = records
        .iter()
        .filter(|record| {
            tracker
                .get(&composite_key(record, filters))
                .is_some_and(|count| *count > 1)
        })
        .cloned()
        .collect();
    debug!(
        input = records.len(),
        retained = retained.len(),
        distinct_keys = tracker.len(),
        "duplicate detection"
    );
    retained
}

#[cfg(test)]
mod tests {
    use dupview_model::{AttrValue, RecordId};

    use super::*;

    fn record(id: usize, size: &str, toppings: i64) -> Record {
        Record::new(RecordId(id))
            .with_attribute("size", size)
            .with_attribute("noOfToppings", toppings)
    }

    #[test]
    fn key_follows_activation_order() {
        let rec = record(0, "large", 2);
        let filters: ActiveFilterSet = ["noOfToppings", "size"].into_iter().collect();
        assert_eq!(composite_key(&rec, &filters), "2large");
        let filters: ActiveFilterSet = ["size", "noOfToppings"].into_iter().collect();
        assert_eq!(composite_key(&rec, &filters), "large2");
    }

    #[test]
    fn missing_attributes_produce_undefined_segments() {
        let rec = record(0, "small", 1);
        let filters: ActiveFilterSet = ["crust"].into_iter().collect();
        assert_eq!(composite_key(&rec, &filters), "undefined");
    }

    #[test]
    fn retains_only_shared_keys_in_input_order() {
        let records = vec![
            record(0, "small", 1),
            record(1, "large", 2),
            record(2, "medium", 1),
            record(3, "large", 2),
            record(4, "small", 2),
        ];
        let filters: ActiveFilterSet = ["size", "noOfToppings"].into_iter().collect();
        let retained = retain_duplicates(&records, &filters);
        let ids: Vec<usize> = retained.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn null_keys_never_group() {
        let records = vec![
            Record::new(RecordId(0)).with_attribute("size", AttrValue::Null),
            Record::new(RecordId(1)).with_attribute("size", AttrValue::Null),
            Record::new(RecordId(2)).with_attribute("size", ""),
            Record::new(RecordId(3)).with_attribute("size", ""),
        ];
        let filters: ActiveFilterSet = ["size"].into_iter().collect();
        assert!(retain_duplicates(&records, &filters).is_empty());
        assert!(key_frequencies(&records, &filters).is_empty());
    }

    #[test]
    fn empty_filter_set_retains_nothing() {
        let records = vec![record(0, "small", 1), record(1, "small", 1)];
        assert!(retain_duplicates(&records, &ActiveFilterSet::new()).is_empty());
    }
}
