//! Grouped Windowed-Statistics Kernel
//!
//! Pure, in-memory feature engineering over per-unit telemetry blocks:
//! moving-average smoothing, fixed-window least-squares degradation slopes,
//! remaining-useful-life targets, and health-status labels.
//!
//! The kernel assumes rows sorted by (unit, cycle) with contiguous unit
//! blocks and does not verify it. It never touches the filesystem or
//! network; collaborator failures belong to the ingestion layer.

mod error;
mod extract;
mod health;
mod partition;
mod rul;
mod smoothing;
mod slope;

pub use error::KernelError;
pub use extract::{DerivedFeatures, FeatureExtractor};
pub use health::{classify, health_status, HealthStatus};
pub use partition::{partition_units, unit_spans, UnitSpan};
pub use rul::remaining_useful_life;
pub use slope::{window_slope, window_slopes};
pub use smoothing::{moving_average, rolling_mean};

use telemetry_model::TelemetryTable;

/// Resolve target sensor columns up front so a missing column aborts the
/// whole batch before any output is produced.
pub(crate) fn resolve_columns<'t>(
    table: &'t TelemetryTable,
    columns: &'t [String],
) -> Result<Vec<(&'t str, &'t [f64])>, KernelError> {
    columns
        .iter()
        .map(|name| {
            table
                .sensor(name)
                .map(|values| (name.as_str(), values))
                .ok_or_else(|| KernelError::MissingColumn(name.clone()))
        })
        .collect()
}
