use serde::{Deserialize, Serialize};

use crate::core::{Viewport, Window};
use crate::error::{ViewError, ViewResult};

use super::validation::validate_engine_config;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load explorer
/// setup without inventing their own ad-hoc format. Every field has a serde
/// default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEngineConfig {
    #[serde(default = "default_overview_viewport")]
    pub overview_viewport: Viewport,
    #[serde(default = "default_detail_viewport")]
    pub detail_viewport: Viewport,
    /// Series tested by the brush value band. `None` picks the first series.
    #[serde(default)]
    pub primary_series: Option<String>,
    /// Explicit initial window. `None` uses the span of the last
    /// `default_record_span` records.
    #[serde(default)]
    pub default_window: Option<Window>,
    #[serde(default = "default_record_span")]
    pub default_record_span: usize,
    #[serde(default = "default_value_nice_step")]
    pub value_nice_step: f64,
    #[serde(default = "default_zoom_out_padding_days")]
    pub zoom_out_padding_days: i64,
    #[serde(default = "default_focus_radius_days")]
    pub focus_radius_days: i64,
}

impl Default for ViewEngineConfig {
    fn default() -> Self {
        Self {
            overview_viewport: default_overview_viewport(),
            detail_viewport: default_detail_viewport(),
            primary_series: None,
            default_window: None,
            default_record_span: default_record_span(),
            value_nice_step: default_value_nice_step(),
            zoom_out_padding_days: default_zoom_out_padding_days(),
            focus_radius_days: default_focus_radius_days(),
        }
    }
}

impl ViewEngineConfig {
    #[must_use]
    pub fn new(overview_viewport: Viewport, detail_viewport: Viewport) -> Self {
        Self {
            overview_viewport,
            detail_viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_primary_series(mut self, series: impl Into<String>) -> Self {
        self.primary_series = Some(series.into());
        self
    }

    #[must_use]
    pub fn with_default_window(mut self, window: Window) -> Self {
        self.default_window = Some(window);
        self
    }

    #[must_use]
    pub fn with_default_record_span(mut self, count: usize) -> Self {
        self.default_record_span = count;
        self
    }

    #[must_use]
    pub fn with_value_nice_step(mut self, step: f64) -> Self {
        self.value_nice_step = step;
        self
    }

    #[must_use]
    pub fn with_zoom_out_padding_days(mut self, days: i64) -> Self {
        self.zoom_out_padding_days = days;
        self
    }

    #[must_use]
    pub fn with_focus_radius_days(mut self, days: i64) -> Self {
        self.focus_radius_days = days;
        self
    }

    pub fn validate(&self) -> ViewResult<()> {
        validate_engine_config(self)
    }

    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize engine config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_overview_viewport() -> Viewport {
    Viewport::new(800, 80)
}

fn default_detail_viewport() -> Viewport {
    Viewport::new(800, 400)
}

fn default_record_span() -> usize {
    10
}

fn default_value_nice_step() -> f64 {
    10.0
}

fn default_zoom_out_padding_days() -> i64 {
    2
}

fn default_focus_radius_days() -> i64 {
    3
}
