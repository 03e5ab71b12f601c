//! Dimension-Table Writer

use crate::catalog::SENSOR_CATALOG;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors while writing the catalog dimension table
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem failure creating or writing the output
    #[error("failed to write dimension table: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the sensor dimension table as CSV.
///
/// One row per sensor: `Sensor_ID,Technical_Name,Unit,Component`. Reporting
/// joins this against the fact table by sensor id. Parent directories are
/// created as needed.
pub fn write_dimension_table(path: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    writeln!(out, "Sensor_ID,Technical_Name,Unit,Component")?;
    for meta in &SENSOR_CATALOG {
        writeln!(
            out,
            "{},{},{},{}",
            meta.id, meta.technical_name, meta.unit, meta.component
        )?;
    }
    out.flush()?;
    tracing::info!("Sensor dimension table written to {}", path.display());
    Ok(())
}
