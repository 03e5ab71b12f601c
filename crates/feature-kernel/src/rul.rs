//! Remaining-Useful-Life Target

use crate::partition::UnitSpan;
use tracing::debug;

/// Compute the RUL column: per unit, `max(cycle) - cycle` for every row.
///
/// The group maximum is taken over the whole span, so the result is always
/// non-negative, reaches 0 exactly at each unit's last recorded cycle, and
/// decreases strictly as cycles increase. Total for valid input; the
/// ingestion layer guarantees cycle indices are present and numeric.
pub fn remaining_useful_life(cycles: &[u32], spans: &[UnitSpan]) -> Vec<u32> {
    let mut rul = Vec::with_capacity(cycles.len());
    for span in spans {
        let group = &cycles[span.range()];
        let max_cycle = group.iter().copied().max().unwrap_or(0);
        rul.extend(group.iter().map(|&c| max_cycle - c));
        debug!("RUL computed for unit {} (max cycle {})", span.unit, max_cycle);
    }
    rul
}
