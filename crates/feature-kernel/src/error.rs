//! Kernel Error Types

use thiserror::Error;

/// Errors raised by the windowed-statistics kernel.
///
/// Both variants fail fast: no derived column is produced for any target
/// when one is raised.
#[derive(Debug, Clone, Error)]
pub enum KernelError {
    /// A requested target column is absent from the input table
    #[error("target column not found in table: {0}")]
    MissingColumn(String),

    /// Window size is not a positive integer
    #[error("window size must be >= 1, got {0}")]
    InvalidWindow(usize),
}
