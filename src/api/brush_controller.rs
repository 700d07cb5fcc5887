use tracing::{debug, warn};

use crate::core::{BrushRegion, Window};
use crate::error::ViewResult;
use crate::extensions::ViewOperation;
use crate::interaction::BrushPixelBounds;
use crate::render::Renderer;

use super::{Transition, ViewEngine, ViewState, WindowLabel};

impl<R: Renderer> ViewEngine<R> {
    /// Converts overview-strip pixel bounds into a domain-space brush region.
    ///
    /// Both vertical edges are converted first so non-finite input is
    /// rejected even when the band ends up open.
    pub fn brush_region(&self, bounds: BrushPixelBounds) -> ViewResult<BrushRegion> {
        let scales = self.overview;
        let t0 = scales.time.pixel_to_time(bounds.x0, scales.viewport)?;
        let t1 = scales.time.pixel_to_time(bounds.x1, scales.viewport)?;
        let v0 = scales.value.pixel_to_value(bounds.y0, scales.viewport)?;
        let v1 = scales.value.pixel_to_value(bounds.y1, scales.viewport)?;

        // A brush touching the strip top or bottom leaves that side unbounded.
        let strip_height = f64::from(scales.viewport.height);
        let top = bounds.y0.min(bounds.y1);
        let bottom = bounds.y0.max(bounds.y1);

        Ok(BrushRegion {
            window: Window::spanning(t0, t1),
            value_low: (bottom < strip_height).then(|| v0.min(v1)),
            value_high: (top > 0.0).then(|| v0.max(v1)),
        })
    }

    /// Applies a brush drag from the overview strip.
    ///
    /// A cleared (`None`) or collapsed brush is ignored and leaves the state
    /// untouched. Otherwise the window becomes the brushed time span and the
    /// visible records are those strictly inside both the time span and the
    /// value band of the primary series.
    pub fn set_brush_selection(
        &mut self,
        bounds: Option<BrushPixelBounds>,
    ) -> ViewResult<Transition> {
        let Some(bounds) = bounds else {
            debug!("brush cleared; keeping current view");
            return Ok(Transition::Ignored);
        };
        if bounds.is_collapsed() {
            debug!(x = bounds.x0, "collapsed brush; keeping current view");
            return Ok(Transition::Ignored);
        }

        let region = self.brush_region(bounds)?;
        if region.window.start() == region.window.end() {
            warn!(
                x0 = bounds.x0,
                x1 = bounds.x1,
                "brush narrower than time resolution; keeping current view"
            );
            return Ok(Transition::Ignored);
        }

        let state = ViewState::new(region.window, WindowLabel::custom()).with_brush(region);
        self.commit(ViewOperation::Brush, state)?;
        Ok(Transition::Applied)
    }
}
