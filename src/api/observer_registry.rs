use tracing::debug;

use crate::error::{ViewError, ViewResult};
use crate::extensions::ViewObserver;
use crate::render::Renderer;

use super::ViewEngine;

impl<R: Renderer> ViewEngine<R> {
    /// Registers an observer. Ids must be non-empty and unique.
    ///
    /// Observers are notified in registration order, so a brush widget
    /// registered before a table sees every `BrushReset` first.
    pub fn register_observer(&mut self, observer: Box<dyn ViewObserver>) -> ViewResult<()> {
        let observer_id = observer.id();
        if observer_id.trim().is_empty() {
            return Err(ViewError::InvalidArgument(
                "observer id must not be blank".to_owned(),
            ));
        }
        if self.has_observer(observer_id) {
            return Err(ViewError::InvalidArgument(format!(
                "observer `{observer_id}` is already registered at revision {}",
                self.revision
            )));
        }
        debug!(
            observer_id,
            position = self.observers.len(),
            revision = self.revision,
            "view observer registered"
        );
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let Some(position) = self
            .observers
            .iter()
            .position(|observer| observer.id() == observer_id)
        else {
            return false;
        };
        self.observers.remove(position);
        debug!(
            observer_id,
            remaining = self.observers.len(),
            "view observer unregistered"
        );
        true
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    /// Ids in dispatch order.
    #[must_use]
    pub fn observer_ids(&self) -> Vec<&str> {
        self.observers.iter().map(|observer| observer.id()).collect()
    }
}
