//! Shared fixtures for dupview-core integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use dupview_model::{Dataset, DisplayRow};

pub const COLUMNS: [&str; 3] = ["size", "noOfToppings", "toppings"];

/// The built-in seven-pizza sample, shared read-only.
pub fn pizzas() -> Arc<Dataset> {
    Arc::new(dupview_ingest::pizzas())
}

/// One line per row: `# label` for headers, `- id values` for records.
pub fn render_plain(rows: &[DisplayRow]) -> String {
    rows.iter()
        .map(|row| match row {
            DisplayRow::Header(header) => format!("# {}", header.label),
            DisplayRow::Record(record) => {
                let values: Vec<String> = COLUMNS
                    .iter()
                    .map(|name| format!("{name}={}", record.display_value(name)))
                    .collect();
                format!("- {} {}", record.id.0, values.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn record_ids(rows: &[DisplayRow]) -> Vec<usize> {
    rows.iter()
        .filter_map(DisplayRow::as_record)
        .map(|record| record.id.0)
        .collect()
}

pub fn header_labels(rows: &[DisplayRow]) -> Vec<String> {
    rows.iter()
        .filter_map(DisplayRow::as_header)
        .map(|header| header.label.clone())
        .collect()
}
