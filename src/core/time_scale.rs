use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::{LinearScale, Viewport, Window};
use crate::error::ViewResult;

/// Span, in milliseconds, given to a scale built from a zero-length window.
const MIN_SPAN_MILLIS: f64 = 1_000.0;

/// Time axis mapping instants onto the horizontal pixel range of a viewport.
///
/// The overview scale is built from the full dataset span and never changes;
/// the detail scale is rebuilt from the current window on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    window: Window,
    domain_start_ms: f64,
    domain_end_ms: f64,
}

impl TimeScale {
    #[must_use]
    pub fn new(window: Window) -> Self {
        let (domain_start_ms, domain_end_ms) = normalize_range(
            datetime_to_unix_millis(window.start()),
            datetime_to_unix_millis(window.end()),
        );
        Self {
            window,
            domain_start_ms,
            domain_end_ms,
        }
    }

    /// Window the scale was built from.
    #[must_use]
    pub fn window(self) -> Window {
        self.window
    }

    /// Effective numeric domain in unix milliseconds.
    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        (self.domain_start_ms, self.domain_end_ms)
    }

    pub fn time_to_pixel(self, time: DateTime<Utc>, viewport: Viewport) -> ViewResult<f64> {
        let viewport = viewport.validate()?;
        self.linear()?
            .domain_to_pixel(datetime_to_unix_millis(time), viewport.horizontal_range())
    }

    /// Inverse of [`time_to_pixel`](Self::time_to_pixel), rounded to the millisecond.
    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> ViewResult<DateTime<Utc>> {
        let viewport = viewport.validate()?;
        let millis = self
            .linear()?
            .pixel_to_domain(pixel, viewport.horizontal_range())?;
        unix_millis_to_datetime(millis)
    }

    fn linear(self) -> ViewResult<LinearScale> {
        LinearScale::new(self.domain_start_ms, self.domain_end_ms)
    }
}

fn normalize_range(start: f64, end: f64) -> (f64, f64) {
    if start == end {
        let half = MIN_SPAN_MILLIS / 2.0;
        return (start - half, end + half);
    }
    (start.min(end), start.max(end))
}
