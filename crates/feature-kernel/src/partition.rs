//! Contiguous Per-Unit Partitioning

use std::ops::Range;

/// Index span of one maximal contiguous run of rows for a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpan {
    /// Unit identifier shared by every row in the span
    pub unit: u32,
    /// Index of the first row
    pub start: usize,
    /// Number of rows
    pub len: usize,
}

impl UnitSpan {
    /// Row index range covered by this span
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Lazily yield one span per maximal run of identical unit ids, in input
/// order.
///
/// Precondition: unit blocks must be contiguous. The iterator does not
/// re-sort and does not check; a unit id reappearing after another id
/// yields two separate spans.
pub fn unit_spans(units: &[u32]) -> impl Iterator<Item = UnitSpan> + '_ {
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= units.len() {
            return None;
        }
        let unit = units[start];
        let mut end = start + 1;
        while end < units.len() && units[end] == unit {
            end += 1;
        }
        let span = UnitSpan {
            unit,
            start,
            len: end - start,
        };
        start = end;
        Some(span)
    })
}

/// Partition the table once so every per-column transform reuses the same
/// spans instead of re-deriving groups per operation.
pub fn partition_units(units: &[u32]) -> Vec<UnitSpan> {
    unit_spans(units).collect()
}
