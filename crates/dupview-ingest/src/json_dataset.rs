use std::path::Path;

use serde_json::Value;
use tracing::debug;

use dupview_model::{AttrValue, Dataset, Record, RecordId};

use crate::csv_dataset::dataset_name;
use crate::error::{IngestError, Result};

/// Converts a JSON value into an attribute value.
///
/// Numbers outside the `i64` range and fractional numbers keep their JSON
/// text; nested objects are kept as compact JSON text.
pub fn value_from_json(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(flag) => AttrValue::Bool(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => AttrValue::Integer(int),
            None => AttrValue::Text(number.to_string()),
        },
        Value::String(text) => AttrValue::Text(text.clone()),
        Value::Array(items) => AttrValue::List(items.iter().map(value_from_json).collect()),
        Value::Object(_) => AttrValue::Text(value.to_string()),
    }
}

/// Builds a dataset from a JSON array of objects.
///
/// Columns follow first-seen key order across all objects.
pub fn dataset_from_json(name: impl Into<String>, document: &Value) -> Result<Dataset> {
    let Value::Array(rows) = document else {
        return Err(IngestError::JsonShape {
            reason: "top-level value must be an array".to_string(),
        });
    };
    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let Value::Object(fields) = row else {
            return Err(IngestError::JsonShape {
                reason: format!("element {idx} is not an object"),
            });
        };
        let mut record = Record::new(RecordId(0));
        for (key, value) in fields {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
            record.set(key.clone(), value_from_json(value));
        }
        records.push(record);
    }
    let mut dataset = Dataset::new(name, columns)?;
    for record in records {
        dataset.push_record(record);
    }
    Ok(dataset)
}

/// Reads a JSON file holding an array of record objects.
pub fn read_json_dataset(path: &Path, name: Option<&str>) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = dataset_from_json(dataset_name(path, name), &document).map_err(|error| {
        match error {
            IngestError::JsonShape { reason } => IngestError::JsonLayout {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        }
    })?;
    debug!(
        path = %path.display(),
        columns = dataset.columns.len(),
        records = dataset.len(),
        "loaded JSON dataset"
    );
    Ok(dataset)
}
