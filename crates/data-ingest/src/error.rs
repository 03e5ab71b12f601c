//! Ingestion Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors during raw dataset ingestion
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist
    #[error("raw data file not found at: {0}")]
    FileNotFound(PathBuf),

    /// Filesystem failure while reading
    #[error("failed to read raw data: {0}")]
    Io(#[from] std::io::Error),

    /// A row has the wrong number of whitespace-separated fields
    #[error("line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A field failed to parse as its expected numeric type
    #[error("line {line}, column '{column}': invalid value '{value}'")]
    ParseField {
        line: usize,
        column: String,
        value: String,
    },

    /// Parsed columns could not be assembled into a table
    #[error("malformed table: {0}")]
    Table(#[from] telemetry_model::TableError),
}
