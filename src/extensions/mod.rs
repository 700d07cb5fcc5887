//! Outbound hooks layered on top of the engine.

pub mod observers;

pub use observers::{BrushSignal, ViewContext, ViewEvent, ViewObserver, ViewOperation};
