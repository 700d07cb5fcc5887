use crate::core::primitives::days;
use crate::core::Dataset;
use crate::error::{ViewError, ViewResult};

use super::ViewEngineConfig;

pub(super) fn validate_engine_config(config: &ViewEngineConfig) -> ViewResult<()> {
    config.overview_viewport.validate()?;
    config.detail_viewport.validate()?;

    if config.default_record_span == 0 {
        return Err(ViewError::InvalidArgument(
            "default record span must be >= 1".to_owned(),
        ));
    }

    if !config.value_nice_step.is_finite() || config.value_nice_step <= 0.0 {
        return Err(ViewError::InvalidArgument(
            "value nice step must be finite and > 0".to_owned(),
        ));
    }

    for (name, value) in [
        ("zoom_out_padding_days", config.zoom_out_padding_days),
        ("focus_radius_days", config.focus_radius_days),
    ] {
        if value < 0 {
            return Err(ViewError::InvalidArgument(format!(
                "{name} must be >= 0, got {value}"
            )));
        }
        days(value)?;
    }

    if let Some(series) = &config.primary_series {
        if series.is_empty() {
            return Err(ViewError::InvalidArgument(
                "primary series name must not be empty".to_owned(),
            ));
        }
    }

    Ok(())
}

pub(super) fn resolve_primary_series(
    config: &ViewEngineConfig,
    dataset: &Dataset,
) -> ViewResult<String> {
    match &config.primary_series {
        Some(series) if dataset.has_series(series) => Ok(series.clone()),
        Some(series) => Err(ViewError::InvalidArgument(format!(
            "primary series `{series}` is not present in the dataset"
        ))),
        None => dataset.series_names().first().cloned().ok_or_else(|| {
            ViewError::InvalidArgument("dataset records carry no series values".to_owned())
        }),
    }
}
