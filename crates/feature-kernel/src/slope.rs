//! Vectorized Fixed-Window Least-Squares Slope

use crate::error::KernelError;
use crate::partition::UnitSpan;
use crate::resolve_columns;
use rayon::prelude::*;
use telemetry_model::TelemetryTable;
use tracing::debug;

/// Ordinary least-squares slopes over every complete window of one group.
///
/// For each window of `window` consecutive values ending at position `i`,
/// fit a line against the fixed predictor x = [0, 1, .., window-1] and
/// return its slope:
///
/// `m = (w*sum(xy) - sum(x)*sum(y)) / (w*sum(x^2) - sum(x)^2)`
///
/// The predictor is the same for every window, so `sum(x)`, `sum(x^2)` and
/// the denominator are computed once per call. Each window is a subslice of
/// the group's buffer; no per-window allocation.
///
/// The first `window - 1` positions have no complete window behind them and
/// are `None`. A zero denominator (only possible for `window = 1`) yields
/// slope 0 everywhere instead of an error.
///
/// `window` must be >= 1; the table-level operations reject `window = 0`
/// before any computation, and this function asserts it in debug builds.
pub fn window_slopes(values: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window >= 1, "window size must be >= 1");
    let w = window as f64;
    let sum_x = (window * (window - 1)) as f64 / 2.0;
    let sum_x2 = ((window - 1) * window * (2 * window - 1)) as f64 / 6.0;
    let denom = w * sum_x2 - sum_x * sum_x;

    if denom == 0.0 {
        return vec![Some(0.0); values.len()];
    }

    let mut out = vec![None; values.len()];
    for (i, win) in values.windows(window).enumerate() {
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        for (x, &y) in win.iter().enumerate() {
            sum_y += y;
            sum_xy += x as f64 * y;
        }
        out[i + window - 1] = Some((w * sum_xy - sum_x * sum_y) / denom);
    }
    out
}

/// Compute `{column}_slope` degradation-trend columns for every target
/// column.
///
/// Windows never span two units. Undefined positions stay `None` so that
/// "insufficient window history" propagates downstream as missing, not as
/// zero. A single extreme value dominating its window is intentional
/// degradation sensitivity, not smoothed away here.
pub fn window_slope(
    table: &TelemetryTable,
    columns: &[String],
    window: usize,
    spans: &[UnitSpan],
) -> Result<Vec<(String, Vec<Option<f64>>)>, KernelError> {
    if window == 0 {
        return Err(KernelError::InvalidWindow(window));
    }
    let targets = resolve_columns(table, columns)?;

    let out = targets
        .par_iter()
        .map(|(name, values)| {
            let mut slopes = Vec::with_capacity(values.len());
            for span in spans {
                slopes.extend(window_slopes(&values[span.range()], window));
            }
            debug!("Window slopes computed for {} ({} rows)", name, slopes.len());
            (format!("{name}_slope"), slopes)
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
    fn test_leading_positions_undefined() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = window_slopes(&values, 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        for s in &out[2..] {
            assert!(s.is_some());
        }
    }

    #[test]
    fn test_constant_window_slope_is_zero() {
        let out = window_slopes(&[7.5; 6], 4);
        for s in &out[3..] {
            assert_eq!(*s, Some(0.0));
        }
    }

    #[test]
    fn test_linear_series_recovers_coefficient() {
        // y = 3 + 0.25*i
        let values: Vec<f64> = (0..10).map(|i| 3.0 + 0.25 * i as f64).collect();
        let out = window_slopes(&values, 5);
        for s in out.into_iter().flatten() {
            assert!((s - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_one_degenerates_to_zero() {
        let out = window_slopes(&[9.0, 4.0, 6.0], 1);
        assert_eq!(out, vec![Some(0.0); 3]);
    }

    #[test]
    #[should_panic(expected = "window size must be >= 1")]
    fn test_zero_window_asserts() {
        window_slopes(&[9.0, 4.0], 0);
    }

    #[test]
    fn test_group_shorter_than_window_all_undefined() {
        let out = window_slopes(&[1.0, 2.0], 5);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn test_windows_do_not_cross_units() {
        let mut table =
            telemetry_model::TelemetryTable::new(vec![1, 1, 1, 2, 2, 2], vec![1, 2, 3, 1, 2, 3])
                .unwrap();
        // Unit 1 trends steeply, unit 2 is flat; a window leaking across the
        // boundary would show a spurious slope at unit 2's start.
        table
            .push_sensor("s_4", vec![0.0, 50.0, 100.0, 5.0, 5.0, 5.0])
            .unwrap();
        let spans = partition_units(table.units());
        let out = window_slope(&table, &["s_4".to_string()], 3, &spans).unwrap();
        let slopes = &out[0].1;
        assert_eq!(slopes[3], None);
        assert_eq!(slopes[4], None);
        assert_eq!(slopes[5], Some(0.0));
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let table = telemetry_model::TelemetryTable::new(vec![1], vec![1]).unwrap();
        let spans = partition_units(table.units());
        let err = window_slope(&table, &["s_1".to_string()], 3, &spans).unwrap_err();
        assert!(matches!(err, KernelError::MissingColumn(_)));
    }

    proptest! {
        #[test]
        fn prop_undefined_exactly_before_first_full_window(
            values in proptest::collection::vec(-1e3f64..1e3, 0..100),
            window in 2usize..10,
        ) {
            let out = window_slopes(&values, window);
            prop_assert_eq!(out.len(), values.len());
            for (i, s) in out.iter().enumerate() {
                if i < window - 1 {
                    prop_assert!(s.is_none());
                } else {
                    prop_assert!(matches!(s, Some(v) if v.is_finite()));
                }
            }
        }
    }
}
