use chrono::{DateTime, Utc};

use crate::error::ViewResult;
use crate::render::{Renderer, ViewFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch inconsistent frames
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_revision: Option<u64>,
    pub last_visible_count: usize,
    pub last_focused: Option<DateTime<Utc>>,
    pub last_description: String,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ViewFrame<'_>) -> ViewResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_revision = Some(frame.revision);
        self.last_visible_count = frame.view.len();
        self.last_focused = frame.state.focused_timestamp();
        self.last_description = frame.state.description();
        Ok(())
    }
}
