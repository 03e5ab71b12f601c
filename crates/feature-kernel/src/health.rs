//! Health-Status Classification

use serde::{Deserialize, Serialize};

/// RUL at or below this is Critical
const CRITICAL_MAX_RUL: f64 = 25.0;
/// RUL above Critical and at or below this is Warning
const WARNING_MAX_RUL: f64 = 75.0;

/// Three-level health label derived from RUL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Critical,
    Warning,
    Healthy,
}

impl HealthStatus {
    /// Label as it appears in exported tables
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "Critical",
            HealthStatus::Warning => "Warning",
            HealthStatus::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a RUL value onto the fixed health partition.
///
/// `rul <= 25` is Critical, `25 < rul <= 75` is Warning, `rul > 75` is
/// Healthy. Boundary values belong to the lower-severity side strictly
/// above them. Thresholds are fixed policy of this component; this is a
/// static partition, not a state machine.
pub fn classify(rul: f64) -> HealthStatus {
    if rul <= CRITICAL_MAX_RUL {
        HealthStatus::Critical
    } else if rul <= WARNING_MAX_RUL {
        HealthStatus::Warning
    } else {
        HealthStatus::Healthy
    }
}

/// Classify an entire RUL column
pub fn health_status(ruls: &[u32]) -> Vec<HealthStatus> {
    ruls.iter().map(|&r| classify(r as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(classify(25.0), HealthStatus::Critical);
        assert_eq!(classify(25.0001), HealthStatus::Warning);
        assert_eq!(classify(75.0), HealthStatus::Warning);
        assert_eq!(classify(75.0001), HealthStatus::Healthy);
    }

    #[test]
    fn test_interior_values() {
        assert_eq!(classify(0.0), HealthStatus::Critical);
        assert_eq!(classify(50.0), HealthStatus::Warning);
        assert_eq!(classify(200.0), HealthStatus::Healthy);
    }

    #[test]
    fn test_column_classification() {
        let labels = health_status(&[0, 25, 26, 75, 76]);
        assert_eq!(
            labels,
            vec![
                HealthStatus::Critical,
                HealthStatus::Critical,
                HealthStatus::Warning,
                HealthStatus::Warning,
                HealthStatus::Healthy,
            ]
        );
    }
}
