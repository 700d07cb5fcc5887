use serde::{Deserialize, Serialize};

use crate::core::{Dataset, Record, TimeScale, ValueScale, Viewport};
use crate::error::ViewResult;

use super::ViewState;

/// Time and value scales for one chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScales {
    pub viewport: Viewport,
    pub time: TimeScale,
    pub value: ValueScale,
}

impl AxisScales {
    /// Maps a record's value for `series` to pixel coordinates, if present.
    pub fn project(&self, record: &Record, series: &str) -> ViewResult<Option<(f64, f64)>> {
        let Some(value) = record.value(series) else {
            return Ok(None);
        };
        let x = self.time.time_to_pixel(record.timestamp, self.viewport)?;
        let y = self.value.value_to_pixel(value, self.viewport)?;
        Ok(Some((x, y)))
    }
}

/// Records currently visible plus the detail scales fitted on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredView<'a> {
    pub records: Vec<&'a Record>,
    pub detail: AxisScales,
}

impl FilteredView<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Record> {
        self.records.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last().copied()
    }
}

/// Derived data kept alongside the state and rebuilt on every transition.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DerivedView {
    pub(super) visible: Vec<usize>,
    pub(super) detail: AxisScales,
}

impl DerivedView {
    pub(super) fn compute(
        dataset: &Dataset,
        state: &ViewState,
        primary_series: &str,
        viewport: Viewport,
        nice_step: f64,
    ) -> ViewResult<Self> {
        let records = dataset.records();
        let visible: Vec<usize> = match state.brush() {
            Some(region) => crate::core::brush_indices(records, region, primary_series),
            None => crate::core::window_index_range(records, state.window()).collect(),
        };
        let value = ValueScale::from_records(visible.iter().map(|&i| &records[i]), nice_step)?;
        let detail = AxisScales {
            viewport,
            time: TimeScale::new(state.window()),
            value,
        };
        Ok(Self { visible, detail })
    }
}
