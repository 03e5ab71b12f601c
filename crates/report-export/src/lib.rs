//! Reporting and Export Layer
//!
//! Joins kernel output back onto the raw table, renames raw sensor ids to
//! engineering terms, and persists the result: the fact-table CSV consumed
//! by BI tooling and per-unit overlay extracts consumed by plotting tools.

mod error;
mod fact_table;
mod rename;
mod trend;

pub use error::ExportError;
pub use fact_table::write_fact_table;
pub use rename::{renamed, reporting_map};
pub use trend::write_trend_extract;
