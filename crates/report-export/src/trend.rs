//! Per-Unit Trend Extract

use crate::error::ExportError;
use feature_kernel::DerivedFeatures;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use telemetry_model::TelemetryTable;
use tracing::info;

/// Write the raw / smoothed / slope overlay series for one unit as CSV.
///
/// This is the data contract of the trend plot: one row per cycle, columns
/// `time_cycles` then `{s}`, `{s}_ma`, `{s}_slope` per requested sensor.
/// Smoothed and slope columns are included only when the kernel pass
/// produced them for that sensor. Raw ids are kept here (the serving-layer
/// rename is for the fact table; plotting tooling keys on stable ids).
pub fn write_trend_extract(
    path: &Path,
    table: &TelemetryTable,
    derived: &DerivedFeatures,
    unit: u32,
    sensors: &[String],
) -> Result<(), ExportError> {
    let rows: Vec<usize> = (0..table.len())
        .filter(|&i| table.units()[i] == unit)
        .collect();
    if rows.is_empty() {
        return Err(ExportError::UnknownUnit(unit));
    }

    struct Series<'a> {
        name: &'a str,
        raw: &'a [f64],
        ma: Option<&'a [f64]>,
        slope: Option<&'a [Option<f64>]>,
    }

    let mut series = Vec::with_capacity(sensors.len());
    for name in sensors {
        let raw = table
            .sensor(name)
            .ok_or_else(|| ExportError::MissingColumn(name.clone()))?;
        let ma_name = format!("{name}_ma");
        let slope_name = format!("{name}_slope");
        series.push(Series {
            name,
            raw,
            ma: derived
                .ma
                .iter()
                .find(|(n, _)| *n == ma_name)
                .map(|(_, v)| v.as_slice()),
            slope: derived
                .slope
                .iter()
                .find(|(n, _)| *n == slope_name)
                .map(|(_, v)| v.as_slice()),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);

    let mut header = vec!["time_cycles".to_string()];
    for s in &series {
        header.push(s.name.to_string());
        if s.ma.is_some() {
            header.push(format!("{}_ma", s.name));
        }
        if s.slope.is_some() {
            header.push(format!("{}_slope", s.name));
        }
    }
    writeln!(out, "{}", header.join(","))?;

    for &row in &rows {
        let mut fields = vec![table.cycles()[row].to_string()];
        for s in &series {
            fields.push(s.raw[row].to_string());
            if let Some(ma) = s.ma {
                fields.push(ma[row].to_string());
            }
            if let Some(slope) = s.slope {
                fields.push(slope[row].map(|v| v.to_string()).unwrap_or_default());
            }
        }
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()?;

    info!(
        "Trend extract for unit {} written to {} ({} rows)",
        unit,
        path.display(),
        rows.len()
    );
    Ok(())
}
