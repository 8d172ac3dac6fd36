// File: crates/chart-data/src/error.rs
// Summary: Error type for tabular file loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV parse failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet parse failed: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error("file contains no data rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {want}")]
    Ragged { row: usize, got: usize, want: usize },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("file exceeds the {0}-row limit")]
    TooLarge(usize),

    #[error("no such column: {0}")]
    NoSuchColumn(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
