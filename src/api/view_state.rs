use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_date;
use crate::core::{BrushRegion, Record, Window};

use super::RangePreset;

/// How the current window was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowLabel {
    /// Window picked from the range dropdown.
    Preset(RangePreset),
    /// Window set directly (brush, zoom-out, focus, custom range, reset).
    /// `description` overrides the date-range text when present.
    Custom { description: Option<String> },
    /// Full dataset after a clear.
    Unset,
}

impl WindowLabel {
    #[must_use]
    pub fn custom() -> Self {
        Self::Custom { description: None }
    }
}

/// Single source of truth for what the detail view shows.
///
/// A new value replaces the previous one on every engine transition; hosts
/// hold read-only snapshots and compare them to detect changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    window: Window,
    label: WindowLabel,
    focused: Option<Record>,
    brush: Option<BrushRegion>,
}

impl ViewState {
    pub(crate) fn new(window: Window, label: WindowLabel) -> Self {
        Self {
            window,
            label,
            focused: None,
            brush: None,
        }
    }

    pub(crate) fn with_focus(mut self, record: Record) -> Self {
        self.focused = Some(record);
        self
    }

    pub(crate) fn with_brush(mut self, region: BrushRegion) -> Self {
        self.brush = Some(region);
        self
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn label(&self) -> &WindowLabel {
        &self.label
    }

    #[must_use]
    pub fn focused(&self) -> Option<&Record> {
        self.focused.as_ref()
    }

    #[must_use]
    pub fn focused_timestamp(&self) -> Option<DateTime<Utc>> {
        self.focused.as_ref().map(|record| record.timestamp)
    }

    /// Brush rectangle in domain space when the window came from a brush.
    #[must_use]
    pub fn brush(&self) -> Option<&BrushRegion> {
        self.brush.as_ref()
    }

    /// Human-readable caption for the current window.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.label {
            WindowLabel::Preset(preset) => preset.label(),
            WindowLabel::Custom {
                description: Some(text),
            } => text.clone(),
            WindowLabel::Custom { description: None } => date_range_text(
                self.window.start(),
                self.window.end(),
            ),
            WindowLabel::Unset => "All data".to_owned(),
        }
    }
}

pub(crate) fn date_range_text(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} – {}", format_date(start), format_date(end))
}

/// Outcome of an operation that may legitimately do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Applied,
    /// Input was degenerate (cleared or collapsed brush); state is unchanged.
    Ignored,
}
