use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Record, Viewport};
use crate::error::{ViewError, ViewResult};

/// Value axis `[0, nice_max]` mapped onto an inverted vertical pixel range.
///
/// The upper bound follows the data it was built from, so the detail axis
/// rescales whenever the window changes. That favors visual detail over a
/// stable y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    data_max: Option<f64>,
}

impl ValueScale {
    pub fn new(domain_max: f64) -> ViewResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ViewError::InvalidData(
                "value domain upper bound must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            domain_max,
            data_max: None,
        })
    }

    /// Fits `[0, nice(max)]` over every series of `records`.
    ///
    /// Without any value (no records, or only empty records) the domain falls
    /// back to `[0, step]`.
    pub fn from_records<'a, I>(records: I, step: f64) -> ViewResult<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let data_max = max_value(records);
        let domain_max = nice_upper_bound(data_max.unwrap_or(0.0), step)?;
        Ok(Self {
            domain_max,
            data_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    /// Raw maximum the scale was fitted on, before rounding.
    #[must_use]
    pub fn data_max(self) -> Option<f64> {
        self.data_max
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ViewResult<f64> {
        let viewport = viewport.validate()?;
        self.linear()?
            .domain_to_pixel(value, viewport.vertical_range())
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ViewResult<f64> {
        let viewport = viewport.validate()?;
        self.linear()?
            .pixel_to_domain(pixel, viewport.vertical_range())
    }

    fn linear(self) -> ViewResult<LinearScale> {
        LinearScale::new(0.0, self.domain_max)
    }
}

/// Largest value across all series of `records`.
#[must_use]
pub fn max_value<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(Record::max_value)
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

/// Rounds `max` up to the next multiple of `step`.
///
/// Non-positive maxima resolve to a single step so the domain never collapses.
pub fn nice_upper_bound(max: f64, step: f64) -> ViewResult<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ViewError::InvalidData(
            "nice step must be finite and > 0".to_owned(),
        ));
    }
    if !max.is_finite() {
        return Err(ViewError::InvalidData(
            "value maximum must be finite".to_owned(),
        ));
    }
    if max <= 0.0 {
        return Ok(step);
    }
    Ok((max / step).ceil() * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_bound_rounds_up_to_step() {
        assert_eq!(nice_upper_bound(73.2, 10.0).expect("nice"), 80.0);
        assert_eq!(nice_upper_bound(80.0, 10.0).expect("nice"), 80.0);
        assert_eq!(nice_upper_bound(0.4, 0.5).expect("nice"), 0.5);
    }

    #[test]
    fn non_positive_maximum_falls_back_to_one_step() {
        assert_eq!(nice_upper_bound(0.0, 10.0).expect("nice"), 10.0);
        assert_eq!(nice_upper_bound(-4.0, 10.0).expect("nice"), 10.0);
    }

    #[test]
    fn invalid_step_is_rejected() {
        assert!(nice_upper_bound(5.0, 0.0).is_err());
        assert!(nice_upper_bound(5.0, f64::NAN).is_err());
    }

    #[test]
    fn value_axis_is_inverted() {
        let viewport = Viewport::new(400, 200);
        let scale = ValueScale::new(50.0).expect("scale");
        assert_eq!(scale.value_to_pixel(50.0, viewport).expect("top"), 0.0);
        assert_eq!(scale.value_to_pixel(0.0, viewport).expect("bottom"), 200.0);
    }
}
