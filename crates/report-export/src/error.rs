//! Export Error Types

use thiserror::Error;

/// Errors during reporting export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure while writing output
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// Requested trend unit has no rows in the table
    #[error("no data found for unit {0}")]
    UnknownUnit(u32),

    /// Requested sensor column is absent from the table
    #[error("sensor column not found in table: {0}")]
    MissingColumn(String),
}
