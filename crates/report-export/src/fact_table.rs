//! Fact-Table CSV Export

use crate::error::ExportError;
use crate::rename::{renamed, reporting_map};
use feature_kernel::DerivedFeatures;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use telemetry_model::TelemetryTable;
use tracing::info;

/// Write the augmented, renamed fact table as CSV.
///
/// Column order: index columns, settings, raw sensors (renamed), smoothed
/// columns, slope columns, `RUL`, `Health_Status`. Undefined slopes are
/// written as empty fields so downstream tools read them as missing, not
/// zero. Raw columns are taken from the table untouched; derived columns
/// come from the kernel pass. Parent directories are created as needed.
pub fn write_fact_table(
    path: &Path,
    table: &TelemetryTable,
    derived: &DerivedFeatures,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let map = reporting_map();
    let mut out = BufWriter::new(fs::File::create(path)?);

    let mut header: Vec<String> = vec!["unit_nr".to_string(), "time_cycles".to_string()];
    header.extend(table.settings().map(|(name, _)| name.to_string()));
    header.extend(table.sensors().map(|(name, _)| renamed(&map, name)));
    header.extend(derived.ma.iter().map(|(name, _)| renamed(&map, name)));
    header.extend(derived.slope.iter().map(|(name, _)| renamed(&map, name)));
    header.push("RUL".to_string());
    header.push("Health_Status".to_string());
    writeln!(out, "{}", header.join(","))?;

    for row in 0..table.len() {
        let mut fields: Vec<String> = Vec::with_capacity(header.len());
        fields.push(table.units()[row].to_string());
        fields.push(table.cycles()[row].to_string());
        for (_, values) in table.settings() {
            fields.push(values[row].to_string());
        }
        for (_, values) in table.sensors() {
            fields.push(values[row].to_string());
        }
        for (_, values) in &derived.ma {
            fields.push(values[row].to_string());
        }
        for (_, values) in &derived.slope {
            fields.push(values[row].map(|v| v.to_string()).unwrap_or_default());
        }
        fields.push(derived.rul[row].to_string());
        fields.push(derived.health[row].as_str().to_string());
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()?;

    info!(
        "Fact table exported to {} ({} rows, {} columns)",
        path.display(),
        table.len(),
        header.len()
    );
    Ok(())
}
