//! Column-Oriented Telemetry Table

use crate::error::TableError;
use serde::{Deserialize, Serialize};

/// One named column of floating-point values
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedColumn {
    name: String,
    values: Vec<f64>,
}

/// In-memory telemetry table for one run-to-failure batch.
///
/// Rows are (unit, cycle) pairs; setting and sensor columns are stored
/// column-major and keep their insertion order. Rows are expected to be
/// sorted by (unit, cycle) with contiguous unit blocks; the table does not
/// enforce this, downstream windowed computations assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryTable {
    /// Unit identifier per row
    units: Vec<u32>,
    /// Operating cycle index per row
    cycles: Vec<u32>,
    /// Operational setting columns, in insertion order
    settings: Vec<NamedColumn>,
    /// Sensor columns, in insertion order
    sensors: Vec<NamedColumn>,
}

impl TelemetryTable {
    /// Create a table from its index columns
    pub fn new(units: Vec<u32>, cycles: Vec<u32>) -> Result<Self, TableError> {
        if units.len() != cycles.len() {
            return Err(TableError::LengthMismatch {
                column: "time_cycles".to_string(),
                expected: units.len(),
                got: cycles.len(),
            });
        }
        Ok(Self {
            units,
            cycles,
            settings: Vec::new(),
            sensors: Vec::new(),
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit identifier column
    pub fn units(&self) -> &[u32] {
        &self.units
    }

    /// Cycle index column
    pub fn cycles(&self) -> &[u32] {
        &self.cycles
    }

    /// Append an operational setting column
    pub fn push_setting(&mut self, name: &str, values: Vec<f64>) -> Result<(), TableError> {
        self.check_new_column(name, values.len())?;
        self.settings.push(NamedColumn {
            name: name.to_string(),
            values,
        });
        Ok(())
    }

    /// Append a sensor column
    pub fn push_sensor(&mut self, name: &str, values: Vec<f64>) -> Result<(), TableError> {
        self.check_new_column(name, values.len())?;
        self.sensors.push(NamedColumn {
            name: name.to_string(),
            values,
        });
        Ok(())
    }

    /// Look up a sensor column by name
    pub fn sensor(&self, name: &str) -> Option<&[f64]> {
        self.sensors
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Iterate sensor columns in insertion order
    pub fn sensors(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.sensors
            .iter()
            .map(|c| (c.name.as_str(), c.values.as_slice()))
    }

    /// Iterate setting columns in insertion order
    pub fn settings(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.settings
            .iter()
            .map(|c| (c.name.as_str(), c.values.as_slice()))
    }

    fn check_new_column(&self, name: &str, len: usize) -> Result<(), TableError> {
        if len != self.len() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.len(),
                got: len,
            });
        }
        let taken = self
            .settings
            .iter()
            .chain(self.sensors.iter())
            .any(|c| c.name == name);
        if taken {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        Ok(())
    }
}
