//! range-view: view-state engine for exploring time-ordered datasets.
//!
//! A fixed dataset of time-stamped multi-series records is narrowed and
//! widened through brush selections, preset ranges, zoom-out and point/row
//! focus. Every interaction funnels into [`ViewEngine`], which keeps a single
//! consistent [`ViewState`](api::ViewState) and the overview/detail scales in
//! sync. Drawing is left to a [`Renderer`](render::Renderer) supplied by the
//! host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ViewEngine, ViewEngineConfig};
pub use error::{ViewError, ViewResult};
