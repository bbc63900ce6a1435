use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by configuration, state and export operations.
///
/// Statistical edge cases (too few rows, zero variance) are not errors; they
/// come back as empty or omitted results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("no dataset loaded")]
    NoDataset,
}
