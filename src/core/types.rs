use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ViewResult<Self> {
        if !self.is_valid() {
            return Err(ViewError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Left-to-right pixel range `[0, width]` used by time axes.
    #[must_use]
    pub fn horizontal_range(self) -> PixelRange {
        PixelRange::new(0.0, f64::from(self.width))
    }

    /// Bottom-to-top pixel range `[height, 0]` used by value axes.
    #[must_use]
    pub fn vertical_range(self) -> PixelRange {
        PixelRange::new(f64::from(self.height), 0.0)
    }
}

/// Pixel interval a scale domain is projected onto.
///
/// `start` receives the domain start, `end` the domain end, so an inverted
/// Y axis is simply a range whose `start` is greater than its `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn extent(self) -> f64 {
        (self.end - self.start).abs()
    }

    pub(crate) fn validate(self) -> ViewResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start == self.end {
            return Err(ViewError::InvalidData(
                "pixel range must be finite and non-empty".to_owned(),
            ));
        }
        Ok(self)
    }
}
