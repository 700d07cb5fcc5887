use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brush rectangle in overview-strip pixel coordinates.
///
/// `x0`/`x1` are horizontal edges, `y0`/`y1` vertical edges; either pair may
/// arrive in any order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushPixelBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl BrushPixelBounds {
    #[must_use]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Horizontal-only brush spanning the full strip height.
    #[must_use]
    pub fn horizontal(x0: f64, x1: f64, strip_height: f64) -> Self {
        Self::new(x0, x1, 0.0, strip_height)
    }

    /// A brush with no horizontal extent selects nothing.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.x0 == self.x1
    }
}

/// User gesture surfaced by the rendering collaborator.
///
/// Each variant maps onto exactly one engine operation; chart point clicks
/// and table row clicks both end in the same focus operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Brush dragged (`Some`) or cleared (`None`).
    BrushMoved(Option<BrushPixelBounds>),
    /// Raw dropdown value, e.g. `Last7Days` or `Year-2022`.
    DropdownSelected(String),
    ZoomOutClicked,
    PointClicked { timestamp: DateTime<Utc> },
    TableRowClicked { row: usize },
    ClearClicked,
    ResetClicked,
}
