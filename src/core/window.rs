use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::shift_time;
use crate::error::{ViewError, ViewResult};

/// Inclusive time window `[start, end]` with `start <= end`.
///
/// Deserialization goes through [`Window::new`], so persisted configs and
/// snapshots cannot carry an inverted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawWindow> for Window {
    type Error = ViewError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Window {
    /// Validated constructor; `start > end` is rejected.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ViewResult<Self> {
        if start > end {
            return Err(ViewError::InvalidArgument(format!(
                "window start {start} must not be after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds the window covering both instants regardless of their order.
    #[must_use]
    pub fn spanning(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }

    /// Strict containment used by brush selections: edges are excluded.
    #[must_use]
    pub fn contains_strictly(self, time: DateTime<Utc>) -> bool {
        self.start < time && time < self.end
    }

    #[must_use]
    pub fn covers(self, other: Window) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Widens both edges by `padding`.
    pub fn padded(self, padding: Duration) -> ViewResult<Self> {
        let start = shift_time(self.start, -padding)?;
        let end = shift_time(self.end, padding)?;
        Self::new(start, end)
    }

    /// Window of half-width `radius` centered on `center`.
    pub fn centered_on(center: DateTime<Utc>, radius: Duration) -> ViewResult<Self> {
        Self::spanning(center, center).padded(radius)
    }

    /// Intersection with `other`, `None` when they do not overlap.
    #[must_use]
    pub fn intersect(self, other: Window) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }
}
