//! Raw Telemetry Ingestion
//!
//! Parses the whitespace-separated, headerless run-to-failure dataset files
//! into a [`telemetry_model::TelemetryTable`]. The kernel never touches the
//! filesystem; every I/O failure surfaces here as a fatal setup error.

mod error;
mod loader;

pub use error::IngestError;
pub use loader::load_raw_data;
