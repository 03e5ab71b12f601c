//! Table Construction Error Types

use thiserror::Error;

/// Errors during table construction
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// Column length does not match the table's row count
    #[error("column '{column}' has {got} values, table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// A column with this name already exists
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
}
