//! Feature Extraction Entry Point

use crate::error::KernelError;
use crate::health::{health_status, HealthStatus};
use crate::partition::partition_units;
use crate::rul::remaining_useful_life;
use crate::slope::window_slope;
use crate::smoothing::moving_average;
use telemetry_model::TelemetryTable;
use tracing::debug;

/// Columns derived by one kernel pass, kept separate from the raw table.
///
/// The source table is borrowed immutably; raw columns are never
/// overwritten. Joining derived columns back onto the table for reporting
/// is the export layer's job.
#[derive(Debug, Clone)]
pub struct DerivedFeatures {
    /// `{sensor}_ma` smoothed columns, one per target, in target order
    pub ma: Vec<(String, Vec<f64>)>,
    /// `{sensor}_slope` columns; `None` marks insufficient window history
    pub slope: Vec<(String, Vec<Option<f64>>)>,
    /// Remaining useful life per row
    pub rul: Vec<u32>,
    /// Health label per row
    pub health: Vec<HealthStatus>,
}

/// One-shot batch feature extractor.
///
/// Stateless between invocations: every call partitions, smooths,
/// estimates slopes, and labels from scratch.
pub struct FeatureExtractor {
    /// Window size shared by smoothing and slope estimation
    window: usize,
}

impl FeatureExtractor {
    /// Create an extractor; fails fast on a non-positive window
    pub fn new(window: usize) -> Result<Self, KernelError> {
        if window == 0 {
            return Err(KernelError::InvalidWindow(window));
        }
        Ok(Self { window })
    }

    /// Run the full kernel over a table: smoothing and slopes for the
    /// target columns, RUL and health status for every row.
    pub fn extract(
        &self,
        table: &TelemetryTable,
        columns: &[String],
    ) -> Result<DerivedFeatures, KernelError> {
        let spans = partition_units(table.units());
        debug!(
            "Extracting features: {} rows, {} units, {} target columns, window {}",
            table.len(),
            spans.len(),
            columns.len(),
            self.window
        );

        let ma = moving_average(table, columns, self.window, &spans)?;
        let slope = window_slope(table, columns, self.window, &spans)?;
        let rul = remaining_useful_life(table.cycles(), &spans);
        let health = health_status(&rul);

        Ok(DerivedFeatures {
            ma,
            slope,
            rul,
            health,
        })
    }
}
