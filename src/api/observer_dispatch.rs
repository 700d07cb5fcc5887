use crate::extensions::{ViewContext, ViewEvent};
use crate::render::Renderer;

use super::ViewEngine;

impl<R: Renderer> ViewEngine<R> {
    pub(super) fn view_context(&self) -> ViewContext {
        ViewContext {
            revision: self.revision,
            window: self.state.window(),
            visible_len: self.derived.visible.len(),
            dataset_len: self.dataset.len(),
            focused: self.state.focused_timestamp(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ViewEvent) {
        let context = self.view_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
