use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Window;

/// Engine operation that produced a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewOperation {
    Preset,
    Brush,
    CustomWindow,
    ZoomOut,
    Focus,
    Clear,
    Reset,
}

/// Instruction for the brush widget, whose pixel position is owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSignal {
    /// Remove the brush selection entirely.
    Clear,
    /// Move the brush visual so it spans `window`.
    MoveTo(Window),
}

/// Read-only state summary passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub revision: u64,
    pub window: Window,
    pub visible_len: usize,
    pub dataset_len: usize,
    pub focused: Option<DateTime<Utc>>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    StateChanged { operation: ViewOperation },
    BrushReset(BrushSignal),
    Rendered,
}

/// Outbound hook for hosts that need to react to engine transitions.
///
/// Observers see events and a context snapshot but cannot mutate the engine.
pub trait ViewObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ViewEvent, context: ViewContext);
}
