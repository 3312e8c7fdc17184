//! Error types for dataset ingestion.

use std::path::PathBuf;

use thiserror::Error;

use dupview_model::ModelError;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON file is not an array of objects.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonLayout { path: PathBuf, reason: String },

    /// In-memory JSON document is not an array of objects.
    #[error("unexpected JSON layout: {reason}")]
    JsonShape { reason: String },

    /// File extension is not a supported format.
    #[error("unsupported dataset format for {path} (expected .csv, .tsv or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Dataset schema was rejected.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
