//! Raw Dataset Loader

use crate::error::IngestError;
use sensor_catalog::{sensor_ids, INDEX_COLUMNS, SETTING_COLUMNS};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use telemetry_model::TelemetryTable;
use tracing::info;

/// Load a raw run-to-failure dataset file.
///
/// The file is whitespace-separated with no header; each row carries
/// 2 index + 3 setting + 21 sensor fields, rows pre-sorted by
/// (unit, cycle). Sortedness is taken on trust; it is the documented
/// precondition of every windowed computation downstream.
pub fn load_raw_data(path: &Path) -> Result<TelemetryTable, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.to_path_buf()));
    }

    let sensors = sensor_ids();
    let expected = INDEX_COLUMNS.len() + SETTING_COLUMNS.len() + sensors.len();

    let mut units: Vec<u32> = Vec::new();
    let mut cycles: Vec<u32> = Vec::new();
    let mut setting_cols: Vec<Vec<f64>> = vec![Vec::new(); SETTING_COLUMNS.len()];
    let mut sensor_cols: Vec<Vec<f64>> = vec![Vec::new(); sensors.len()];

    let reader = BufReader::new(File::open(path)?);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_nr = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != expected {
            return Err(IngestError::ColumnCount {
                line: line_nr,
                expected,
                got: fields.len(),
            });
        }

        units.push(parse_u32(fields[0], line_nr, INDEX_COLUMNS[0])?);
        cycles.push(parse_u32(fields[1], line_nr, INDEX_COLUMNS[1])?);
        for (i, col) in setting_cols.iter_mut().enumerate() {
            col.push(parse_f64(fields[2 + i], line_nr, SETTING_COLUMNS[i])?);
        }
        let sensor_base = INDEX_COLUMNS.len() + SETTING_COLUMNS.len();
        for (i, col) in sensor_cols.iter_mut().enumerate() {
            col.push(parse_f64(fields[sensor_base + i], line_nr, &sensors[i])?);
        }
    }

    let mut table = TelemetryTable::new(units, cycles)?;
    for (name, values) in SETTING_COLUMNS.iter().zip(setting_cols) {
        table.push_setting(name, values)?;
    }
    for (name, values) in sensors.iter().zip(sensor_cols) {
        table.push_sensor(name, values)?;
    }

    info!(
        "Loaded raw data from {}: {} rows, {} sensor columns",
        path.display(),
        table.len(),
        sensors.len()
    );
    Ok(table)
}

fn parse_u32(field: &str, line: usize, column: &str) -> Result<u32, IngestError> {
    field.parse().map_err(|_| IngestError::ParseField {
        line,
        column: column.to_string(),
        value: field.to_string(),
    })
}

fn parse_f64(field: &str, line: usize, column: &str) -> Result<f64, IngestError> {
    field.parse().map_err(|_| IngestError::ParseField {
        line,
        column: column.to_string(),
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw_row(unit: u32, cycle: u32, seed: f64) -> String {
        let mut fields = vec![unit.to_string(), cycle.to_string()];
        for i in 0..3 {
            fields.push(format!("{:.4}", seed + i as f64 * 0.01));
        }
        for i in 0..21 {
            fields.push(format!("{:.2}", 500.0 + seed + i as f64));
        }
        fields.join(" ")
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_well_formed_file() {
        let body = format!(
            "{}\n{}\n{}\n",
            raw_row(1, 1, 0.1),
            raw_row(1, 2, 0.2),
            raw_row(2, 1, 0.3)
        );
        let path = write_temp("ingest_test_ok.txt", &body);
        let table = load_raw_data(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.units(), &[1, 1, 2]);
        assert_eq!(table.cycles(), &[1, 2, 1]);
        assert!(table.sensor("s_21").is_some());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = load_raw_data(Path::new("/nonexistent/train_FD001.txt")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound(_)));
    }

    #[test]
    fn test_short_row_rejected() {
        let path = write_temp("ingest_test_short.txt", "1 1 0.5 0.5\n");
        let err = load_raw_data(&path).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ColumnCount { line: 1, expected: 26, got: 4 }
        ));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bad_field_rejected() {
        let mut row = raw_row(1, 1, 0.1);
        row = row.replacen("1 1", "1 abc", 1);
        let path = write_temp("ingest_test_badfield.txt", &format!("{row}\n"));
        let err = load_raw_data(&path).unwrap_err();
        assert!(matches!(err, IngestError::ParseField { ref column, .. } if column == "time_cycles"));
        std::fs::remove_file(&path).ok();
    }
}
