//! Dataset loading for grouped duplicate views.
//!
//! The grouping core works on an already-loaded [`Dataset`]; this crate
//! supplies one from CSV or JSON files, from a polars `DataFrame`, or from the
//! built-in pizza sample.

pub mod csv_dataset;
pub mod error;
pub mod frame;
pub mod json_dataset;
pub mod sample;

use std::path::Path;

use tracing::info;

use dupview_model::Dataset;

pub use csv_dataset::{CsvOptions, parse_cell, read_csv_dataset};
pub use error::{IngestError, Result};
pub use frame::{any_to_value, dataset_from_frame, format_numeric};
pub use json_dataset::{dataset_from_json, read_json_dataset, value_from_json};
pub use sample::pizzas;

/// Loads a dataset, choosing the reader from the file extension.
pub fn load_dataset(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    let dataset = match extension.as_deref() {
        Some("csv") => read_csv_dataset(path, options)?,
        Some("tsv") => read_csv_dataset(path, &options.clone().with_delimiter(b'\t'))?,
        Some("json") => read_json_dataset(path, options.name.as_deref())?,
        _ => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    info!(
        dataset = %dataset.name,
        records = dataset.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
