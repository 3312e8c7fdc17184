use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use dupview_model::{AttrValue, Dataset, Record, RecordId};

use crate::error::{IngestError, Result};

/// Settings for reading delimited text into a dataset.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Cells containing this character are split into list values.
    pub list_separator: Option<char>,
    /// Dataset name; defaults to the file stem.
    pub name: Option<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            list_separator: Some(';'),
            name: None,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_list_separator(mut self, separator: Option<char>) -> Self {
        self.list_separator = separator;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn parse_scalar(raw: &str) -> AttrValue {
    match raw.parse::<i64>() {
        Ok(value) => AttrValue::Integer(value),
        Err(_) => AttrValue::Text(raw.to_string()),
    }
}

/// Converts a raw cell into a value; blank cells yield `None`.
pub fn parse_cell(raw: &str, list_separator: Option<char>) -> Option<AttrValue> {
    let cell = normalize_cell(raw);
    if cell.is_empty() {
        return None;
    }
    if let Some(separator) = list_separator
        && cell.contains(separator)
    {
        let items = cell
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_scalar)
            .collect();
        return Some(AttrValue::List(items));
    }
    Some(parse_scalar(cell))
}

pub(crate) fn dataset_name(path: &Path, explicit: Option<&str>) -> String {
    explicit.map(str::to_string).unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string())
    })
}

/// Reads a CSV file whose first row names the columns.
pub fn read_csv_dataset(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |error: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut dataset = Dataset::new(dataset_name(path, options.name.as_deref()), columns)?;
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let mut record = Record::new(RecordId(0));
        for (column, raw) in dataset.columns.iter().zip(row.iter()) {
            if let Some(value) = parse_cell(raw, options.list_separator) {
                record.set(column.clone(), value);
            }
        }
        dataset.push_record(record);
    }
    debug!(
        path = %path.display(),
        columns = dataset.columns.len(),
        records = dataset.len(),
        "loaded CSV dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} no  of\ttoppings "), "no of toppings");
    }

    #[test]
    fn cells_parse_to_typed_values() {
        assert_eq!(parse_cell(" 2 ", Some(';')), Some(AttrValue::from(2)));
        assert_eq!(parse_cell("large", Some(';')), Some(AttrValue::from("large")));
        assert_eq!(parse_cell("   ", Some(';')), None);
        assert_eq!(
            parse_cell("sausage; red pepper", Some(';')),
            Some(AttrValue::from(vec!["sausage", "red pepper"]))
        );
        assert_eq!(
            parse_cell("sausage; red pepper", None),
            Some(AttrValue::from("sausage; red pepper"))
        );
    }
}
