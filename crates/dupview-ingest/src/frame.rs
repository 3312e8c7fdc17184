//! Conversion from polars DataFrames.

use polars::prelude::{AnyValue, DataFrame, Series};

use dupview_model::{AttrValue, Dataset, Record, RecordId};

use crate::error::{IngestError, Result};

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn list_values(series: &Series) -> Vec<AttrValue> {
    (0..series.len())
        .map(|idx| {
            series
                .get(idx)
                .ok()
                .and_then(any_to_value)
                .unwrap_or(AttrValue::Null)
        })
        .collect()
}

/// Converts a polars cell into an attribute value; nulls yield `None`.
pub fn any_to_value(value: AnyValue<'_>) -> Option<AttrValue> {
    let converted = match value {
        AnyValue::Null => return None,
        AnyValue::Boolean(b) => AttrValue::Bool(b),
        AnyValue::Int8(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => AttrValue::Integer(v),
        AnyValue::UInt8(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => AttrValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(int) => AttrValue::Integer(int),
            Err(_) => AttrValue::Text(v.to_string()),
        },
        AnyValue::Float32(v) => AttrValue::Text(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => AttrValue::Text(format_numeric(v)),
        AnyValue::String(s) => AttrValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => AttrValue::Text(s.to_string()),
        AnyValue::List(series) => AttrValue::List(list_values(&series)),
        other => AttrValue::Text(other.to_string()),
    };
    Some(converted)
}

/// Builds a dataset from a DataFrame, one record per row.
pub fn dataset_from_frame(name: impl Into<String>, df: &DataFrame) -> Result<Dataset> {
    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect();
    let mut dataset = Dataset::new(name, columns)?;
    for idx in 0..df.height() {
        let mut record = Record::new(RecordId(0));
        for column in df.get_columns() {
            let cell = column.get(idx).map_err(|error| IngestError::DataFrame {
                message: error.to_string(),
            })?;
            if let Some(value) = any_to_value(cell) {
                record.set(column.name().to_string(), value);
            }
        }
        dataset.push_record(record);
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_formatting_strips_zeros() {
        assert_eq!(format_numeric(2.50), "2.5");
        assert_eq!(format_numeric(3.0), "3");
        assert_eq!(format_numeric(10.0), "10");
    }
}
