use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{Record, Window};

/// Domain-space rectangle drawn by a brush: a time window plus a value band
/// tested against one series.
///
/// A missing value bound means the brush reached that edge of the overview
/// strip, so the band is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRegion {
    pub window: Window,
    pub value_low: Option<f64>,
    pub value_high: Option<f64>,
}

impl BrushRegion {
    /// Strict test: records lying exactly on any edge are excluded.
    #[must_use]
    pub fn admits(&self, record: &Record, series: &str) -> bool {
        if !self.window.contains_strictly(record.timestamp) {
            return false;
        }
        record
            .value(series)
            .is_some_and(|value| self.admits_value(value))
    }

    #[must_use]
    pub fn admits_value(&self, value: f64) -> bool {
        self.value_low.is_none_or(|low| low < value)
            && self.value_high.is_none_or(|high| value < high)
    }
}

/// Index range of the records whose timestamp lies in the inclusive `window`.
///
/// `records` must be sorted ascending by timestamp; the range is found by
/// binary search so the cost is `O(log n)`.
#[must_use]
pub fn window_index_range(records: &[Record], window: Window) -> Range<usize> {
    let start = records.partition_point(|record| record.timestamp < window.start());
    let end = records.partition_point(|record| record.timestamp <= window.end());
    start..end.max(start)
}

/// Records whose timestamp lies in the inclusive `window`, in original order.
///
/// An empty slice is a valid answer, not an error.
#[must_use]
pub fn filter_by_window(records: &[Record], window: Window) -> &[Record] {
    &records[window_index_range(records, window)]
}

/// Indices of the records admitted by `region` on `series`, in original order.
#[must_use]
pub fn brush_indices(records: &[Record], region: &BrushRegion, series: &str) -> Vec<usize> {
    let candidates = window_index_range(records, region.window);
    candidates
        .filter(|&index| region.admits(&records[index], series))
        .collect()
}
