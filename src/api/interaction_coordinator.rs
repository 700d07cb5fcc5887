use tracing::trace;

use crate::error::ViewResult;
use crate::interaction::Gesture;
use crate::render::Renderer;

use super::{Transition, ViewEngine};

impl<R: Renderer> ViewEngine<R> {
    /// Routes a collaborator gesture to its engine operation.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> ViewResult<Transition> {
        trace!(?gesture, "handle gesture");
        match gesture {
            Gesture::BrushMoved(bounds) => return self.set_brush_selection(bounds),
            Gesture::DropdownSelected(value) => self.select_dropdown(&value)?,
            Gesture::ZoomOutClicked => self.zoom_out()?,
            Gesture::PointClicked { timestamp } => self.focus_point(timestamp)?,
            Gesture::TableRowClicked { row } => self.focus_table_row(row)?,
            Gesture::ClearClicked => self.clear()?,
            Gesture::ResetClicked => self.reset()?,
        }
        Ok(Transition::Applied)
    }
}
