use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::{AxisScales, ViewEngine, ViewState};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub revision: u64,
    pub state: ViewState,
    pub description: String,
    pub primary_series: String,
    pub visible_timestamps: Vec<DateTime<Utc>>,
    pub detail: AxisScales,
    pub overview: AxisScales,
}

impl<R: Renderer> ViewEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            revision: self.revision,
            state: self.state.clone(),
            description: self.state.description(),
            primary_series: self.primary_series.clone(),
            visible_timestamps: self.visible_records().map(|r| r.timestamp).collect(),
            detail: self.derived.detail,
            overview: self.overview,
        }
    }
}
