use crate::api::{AxisScales, FilteredView, ViewState};
use crate::error::{ViewError, ViewResult};

/// Everything a drawing backend needs for one pass: the state snapshot, the
/// filtered records with their detail scales, and the fixed overview scales.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame<'a> {
    pub revision: u64,
    pub state: &'a ViewState,
    pub view: FilteredView<'a>,
    pub overview: AxisScales,
    pub series: &'a [String],
}

impl ViewFrame<'_> {
    pub fn validate(&self) -> ViewResult<()> {
        self.view.detail.viewport.validate()?;
        self.overview.viewport.validate()?;

        let window = self.state.window();
        if window.start() > window.end() {
            return Err(ViewError::InvalidData(
                "frame window start must not be after end".to_owned(),
            ));
        }
        if let Some(record) = self
            .view
            .records
            .iter()
            .find(|record| !window.contains(record.timestamp))
        {
            return Err(ViewError::InvalidData(format!(
                "frame record at {} lies outside the visible window",
                record.timestamp
            )));
        }
        Ok(())
    }
}
