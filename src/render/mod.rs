mod frame;
mod null_renderer;

pub use frame::ViewFrame;
pub use null_renderer::NullRenderer;

use crate::error::ViewResult;

/// Contract implemented by the host's drawing layer.
///
/// Backends receive a fully derived `ViewFrame` so axes, lines, tooltips and
/// tables stay isolated from window arithmetic and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ViewFrame<'_>) -> ViewResult<()>;
}
