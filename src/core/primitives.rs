use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ViewError, ViewResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ViewResult<f64> {
    value.to_f64().ok_or_else(|| {
        ViewError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts fractional unix milliseconds back to an instant, rounding to the
/// nearest millisecond.
pub fn unix_millis_to_datetime(millis: f64) -> ViewResult<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(ViewError::InvalidData(
            "time value must be finite".to_owned(),
        ));
    }
    let rounded = millis.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(ViewError::InvalidData(
            "time value is outside the representable range".to_owned(),
        ));
    }
    DateTime::<Utc>::from_timestamp_millis(rounded as i64).ok_or_else(|| {
        ViewError::InvalidData("time value is outside the representable range".to_owned())
    })
}

pub fn days(count: i64) -> ViewResult<Duration> {
    Duration::try_days(count)
        .ok_or_else(|| ViewError::InvalidArgument(format!("day count {count} is out of range")))
}

pub fn shift_time(time: DateTime<Utc>, delta: Duration) -> ViewResult<DateTime<Utc>> {
    time.checked_add_signed(delta)
        .ok_or_else(|| ViewError::InvalidArgument("shifted time is out of range".to_owned()))
}

#[must_use]
pub fn format_date(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}
