use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::Window;
use crate::core::primitives::days;
use crate::error::ViewResult;
use crate::extensions::{BrushSignal, ViewEvent, ViewOperation};
use crate::render::Renderer;

use super::view_state::date_range_text;
use super::{DropdownChoice, RangePreset, ViewEngine, ViewState, WindowLabel};

impl<R: Renderer> ViewEngine<R> {
    /// Applies a canned range and moves the brush visual onto it.
    ///
    /// A year without records yields an empty view, not an error.
    pub fn set_preset_range(&mut self, preset: RangePreset) -> ViewResult<()> {
        let window = preset.window(&self.dataset)?;
        self.commit(
            ViewOperation::Preset,
            ViewState::new(window, WindowLabel::Preset(preset)),
        )?;
        self.emit_event(ViewEvent::BrushReset(BrushSignal::MoveTo(window)));
        Ok(())
    }

    /// Parses a raw dropdown value and applies it.
    ///
    /// `Custom` and the empty placeholder show the full dataset span.
    pub fn select_dropdown(&mut self, value: &str) -> ViewResult<()> {
        match value.parse::<DropdownChoice>()? {
            DropdownChoice::Preset(preset) => self.set_preset_range(preset),
            DropdownChoice::Custom | DropdownChoice::Placeholder => {
                let span = self.dataset.span();
                self.set_custom_window(span.start(), span.end())
            }
        }
    }

    /// Sets the window directly; `start > end` is rejected without effect.
    pub fn set_custom_window(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ViewResult<()> {
        let window = Window::new(start, end)?;
        self.commit(
            ViewOperation::CustomWindow,
            ViewState::new(window, WindowLabel::custom()),
        )
    }

    /// Pads the current window on both sides and re-filters the full dataset.
    ///
    /// The label describes the first and last record now visible; focus
    /// survives the zoom.
    pub fn zoom_out(&mut self) -> ViewResult<()> {
        let padding = days(self.config.zoom_out_padding_days)?;
        let window = self.state.window().padded(padding)?;

        let visible = crate::core::filter_by_window(self.dataset.records(), window);
        let description = match (visible.first(), visible.last()) {
            (Some(first), Some(last)) => date_range_text(first.timestamp, last.timestamp),
            _ => date_range_text(window.start(), window.end()),
        };
        debug!(
            padding_days = self.config.zoom_out_padding_days,
            visible = visible.len(),
            "zoom out"
        );

        let mut state = ViewState::new(
            window,
            WindowLabel::Custom {
                description: Some(description),
            },
        );
        if let Some(record) = self.state.focused() {
            state = state.with_focus(record.clone());
        }
        self.commit(ViewOperation::ZoomOut, state)
    }

    /// Shows the whole dataset, drops focus and clears the brush visual.
    pub fn clear(&mut self) -> ViewResult<()> {
        let span = self.dataset.span();
        self.commit(ViewOperation::Clear, ViewState::new(span, WindowLabel::Unset))?;
        self.emit_event(ViewEvent::BrushReset(BrushSignal::Clear));
        Ok(())
    }

    /// Restores the construction-time window and moves the brush back onto it.
    pub fn reset(&mut self) -> ViewResult<()> {
        let window = self.default_window;
        self.commit(
            ViewOperation::Reset,
            ViewState::new(window, WindowLabel::custom()),
        )?;
        self.emit_event(ViewEvent::BrushReset(BrushSignal::MoveTo(window)));
        Ok(())
    }
}
