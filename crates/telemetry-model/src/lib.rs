//! Fleet Telemetry Data Model
//!
//! Column-oriented storage for run-to-failure telemetry batches: one row per
//! (unit, operating cycle), plus named setting and sensor columns.

mod error;
mod table;

pub use error::TableError;
pub use table::TelemetryTable;
