use crate::core::types::PixelRange;
use crate::error::{ViewError, ViewResult};

/// Linear mapping between a numeric domain and a pixel range.
///
/// The mapping is permissive: values outside the domain project outside the
/// range, and clamping is left to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ViewResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ViewError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range: PixelRange) -> ViewResult<f64> {
        let range = range.validate()?;
        if !value.is_finite() {
            return Err(ViewError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.start + normalized * (range.end - range.start))
    }

    pub fn pixel_to_domain(self, pixel: f64, range: PixelRange) -> ViewResult<f64> {
        let range = range.validate()?;
        if !pixel.is_finite() {
            return Err(ViewError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.start) / (range.end - range.start);
        Ok(self.domain_start + normalized * span)
    }
}
