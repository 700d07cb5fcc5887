use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::Record;
use crate::core::Window;
use crate::core::primitives::days;
use crate::error::{ViewError, ViewResult};
use crate::extensions::ViewOperation;
use crate::render::Renderer;

use super::{ViewEngine, ViewState, WindowLabel};

/// One row of the linked data table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow<'a> {
    pub record: &'a Record,
    /// `true` for the record the chart is currently focused on.
    pub focused: bool,
}

impl<R: Renderer> ViewEngine<R> {
    /// Re-centers the window on the record at `timestamp` and focuses it.
    ///
    /// This is the single entry point for both chart-point and table-row
    /// clicks, so chart and table can never disagree about the focus.
    pub fn focus_on(&mut self, timestamp: DateTime<Utc>) -> ViewResult<()> {
        let record = self.dataset.find(timestamp).cloned().ok_or_else(|| {
            ViewError::InvalidArgument(format!("no record with timestamp {timestamp}"))
        })?;
        let radius = days(self.config.focus_radius_days)?;
        let window = Window::centered_on(record.timestamp, radius)?;
        self.commit(
            ViewOperation::Focus,
            ViewState::new(window, WindowLabel::custom()).with_focus(record),
        )
    }

    /// Chart point click.
    pub fn focus_point(&mut self, timestamp: DateTime<Utc>) -> ViewResult<()> {
        self.focus_on(timestamp)
    }

    /// Table row click; `row` indexes the currently visible records.
    pub fn focus_table_row(&mut self, row: usize) -> ViewResult<()> {
        let timestamp = self
            .visible_records()
            .nth(row)
            .map(|record| record.timestamp)
            .ok_or_else(|| {
                ViewError::InvalidArgument(format!(
                    "table row {row} is out of range for {} visible records",
                    self.visible_len()
                ))
            })?;
        self.focus_on(timestamp)
    }

    /// Visible records as table rows, flagging the focused one.
    #[must_use]
    pub fn table_rows(&self) -> Vec<TableRow<'_>> {
        let focused = self.state.focused_timestamp();
        self.visible_records()
            .map(|record| TableRow {
                record,
                focused: focused == Some(record.timestamp),
            })
            .collect()
    }
}
