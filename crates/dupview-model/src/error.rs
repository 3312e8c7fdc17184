use thiserror::Error;

/// Schema errors raised while building a dataset.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },
    #[error("column name must not be empty")]
    EmptyColumnName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
