//! Per-Unit Moving-Average Smoothing

use crate::error::KernelError;
use crate::partition::UnitSpan;
use crate::resolve_columns;
use rayon::prelude::*;
use telemetry_model::TelemetryTable;
use tracing::debug;

/// Rolling mean over one group's values.
///
/// Position `i` gets the mean of `values[max(0, i-window+1) ..= i]`: an
/// expanding window until full history is available, a full `window`-sample
/// mean afterwards. Output length equals input length; `window = 1` is the
/// identity.
///
/// `window` must be >= 1; the table-level operations reject `window = 0`
/// before any computation, and this function asserts it in debug builds.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 1, "window size must be >= 1");
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for i in 0..values.len() {
        sum += values[i];
        if i >= window {
            sum -= values[i - window];
        }
        let count = (i + 1).min(window);
        out.push(sum / count as f64);
    }
    out
}

/// Compute `{column}_ma` smoothed columns for every target column.
///
/// Groups never mix: each span's mean is seeded only from that span's own
/// history. Columns are independent and processed in parallel.
pub fn moving_average(
    table: &TelemetryTable,
    columns: &[String],
    window: usize,
    spans: &[UnitSpan],
) -> Result<Vec<(String, Vec<f64>)>, KernelError> {
    if window == 0 {
        return Err(KernelError::InvalidWindow(window));
    }
    let targets = resolve_columns(table, columns)?;

    let out = targets
        .par_iter()
        .map(|(name, values)| {
            let mut smoothed = Vec::with_capacity(values.len());
            for span in spans {
                smoothed.extend(rolling_mean(&values[span.range()], window));
            }
            debug!("Moving average computed for {} ({} rows)", name, smoothed.len());
            (format!("{name}_ma"), smoothed)
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition_units;
    use proptest::prelude::*;

    #[test]
    fn test_expanding_then_full_window() {
        let values = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let out = rolling_mean(&values, 3);
        assert_eq!(out, vec![2.0, 3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_window_one_is_identity() {
        let values = vec![5.0, 1.0, -3.0];
        assert_eq!(rolling_mean(&values, 1), values);
    }

    #[test]
    #[should_panic(expected = "window size must be >= 1")]
    fn test_zero_window_asserts() {
        rolling_mean(&[1.0, 2.0], 0);
    }

    #[test]
    fn test_window_larger_than_group() {
        let out = rolling_mean(&[3.0, 5.0], 10);
        assert_eq!(out, vec![3.0, 4.0]);
    }

    #[test]
    fn test_groups_do_not_mix() {
        let mut table =
            telemetry_model::TelemetryTable::new(vec![1, 1, 2, 2], vec![1, 2, 1, 2]).unwrap();
        // Unit 1 ends high, unit 2 starts low.
        table.push_sensor("s_2", vec![100.0, 100.0, 1.0, 1.0]).unwrap();
        let spans = partition_units(table.units());
        let out = moving_average(&table, &["s_2".to_string()], 2, &spans).unwrap();
        assert_eq!(out[0].0, "s_2_ma");
        // First row of unit 2 sees only its own value.
        assert_eq!(out[0].1, vec![100.0, 100.0, 1.0, 1.0]);
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let table = telemetry_model::TelemetryTable::new(vec![1], vec![1]).unwrap();
        let spans = partition_units(table.units());
        let err = moving_average(&table, &["s_9".to_string()], 3, &spans).unwrap_err();
        assert!(matches!(err, KernelError::MissingColumn(_)));
    }

    #[test]
    fn test_zero_window_rejected() {
        let table = telemetry_model::TelemetryTable::new(vec![1], vec![1]).unwrap();
        let spans = partition_units(table.units());
        let err = moving_average(&table, &[], 0, &spans).unwrap_err();
        assert!(matches!(err, KernelError::InvalidWindow(0)));
    }

    proptest! {
        #[test]
        fn prop_output_length_matches_input(
            values in proptest::collection::vec(-1e6f64..1e6, 0..200),
            window in 1usize..20,
        ) {
            prop_assert_eq!(rolling_mean(&values, window).len(), values.len());
        }

        #[test]
        fn prop_prefix_positions_are_prefix_means(
            values in proptest::collection::vec(-1e3f64..1e3, 1..50),
            window in 2usize..10,
        ) {
            let out = rolling_mean(&values, window);
            for i in 0..values.len().min(window - 1) {
                let expected = values[..=i].iter().sum::<f64>() / (i + 1) as f64;
                prop_assert!((out[i] - expected).abs() < 1e-9);
            }
        }
    }
}
