use tracing::{debug, trace};

use crate::core::{Dataset, Record, TimeScale, ValueScale, Window};
use crate::error::ViewResult;
use crate::extensions::{ViewEvent, ViewObserver, ViewOperation};
use crate::render::{Renderer, ViewFrame};

use super::filtered_view::DerivedView;
use super::validation::resolve_primary_series;
use super::{AxisScales, FilteredView, ViewEngineConfig, ViewState, WindowLabel};

/// Main orchestration facade consumed by host applications.
///
/// `ViewEngine` owns the dataset and the current [`ViewState`], turns every
/// interaction into a new state, and keeps the overview and detail scales in
/// sync with it. Operations run synchronously; the last one wins.
pub struct ViewEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ViewEngineConfig,
    pub(super) dataset: Dataset,
    pub(super) primary_series: String,
    pub(super) default_window: Window,
    pub(super) overview: AxisScales,
    pub(super) state: ViewState,
    pub(super) derived: DerivedView,
    pub(super) revision: u64,
    pub(super) observers: Vec<Box<dyn ViewObserver>>,
}

impl<R: Renderer> ViewEngine<R> {
    pub fn new(renderer: R, dataset: Dataset, config: ViewEngineConfig) -> ViewResult<Self> {
        config.validate()?;
        let primary_series = resolve_primary_series(&config, &dataset)?;

        let default_window = match config.default_window {
            Some(window) => window,
            None => dataset.tail_span(config.default_record_span),
        };
        let state = ViewState::new(default_window, WindowLabel::custom());
        let derived = DerivedView::compute(
            &dataset,
            &state,
            &primary_series,
            config.detail_viewport,
            config.value_nice_step,
        )?;

        // The overview is fitted once, over every record.
        let overview = AxisScales {
            viewport: config.overview_viewport,
            time: TimeScale::new(dataset.span()),
            value: ValueScale::from_records(dataset.records(), config.value_nice_step)?,
        };

        debug!(
            records = dataset.len(),
            primary_series = %primary_series,
            overview_value_max = overview.value.domain().1,
            window_start = %default_window.start(),
            window_end = %default_window.end(),
            visible = derived.visible.len(),
            "view engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            primary_series,
            default_window,
            overview,
            state,
            derived,
            revision: 0,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &ViewEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn primary_series(&self) -> &str {
        &self.primary_series
    }

    /// Window restored by [`reset`](Self::reset).
    #[must_use]
    pub fn default_window(&self) -> Window {
        self.default_window
    }

    /// Monotonic counter bumped on every applied transition.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn overview_scales(&self) -> AxisScales {
        self.overview
    }

    #[must_use]
    pub fn detail_scales(&self) -> AxisScales {
        self.derived.detail
    }

    #[must_use]
    pub fn filtered_view(&self) -> FilteredView<'_> {
        FilteredView {
            records: self.visible_records().collect(),
            detail: self.derived.detail,
        }
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.dataset.records();
        self.derived.visible.iter().map(move |&i| &records[i])
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.derived.visible.len()
    }

    #[must_use]
    pub fn frame(&self) -> ViewFrame<'_> {
        ViewFrame {
            revision: self.revision,
            state: &self.state,
            view: self.filtered_view(),
            overview: self.overview,
            series: self.dataset.series_names(),
        }
    }

    pub fn render(&mut self) -> ViewResult<()> {
        // Built from fields directly so the renderer can be borrowed mutably.
        let records = self.dataset.records();
        let frame = ViewFrame {
            revision: self.revision,
            state: &self.state,
            view: FilteredView {
                records: self.derived.visible.iter().map(|&i| &records[i]).collect(),
                detail: self.derived.detail,
            },
            overview: self.overview,
            series: self.dataset.series_names(),
        };
        self.renderer.render(&frame)?;
        trace!(revision = self.revision, "frame rendered");
        self.emit_event(ViewEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the state wholesale after deriving its filtered view.
    ///
    /// Derivation runs first so a failure leaves the previous state intact.
    pub(super) fn commit(&mut self, operation: ViewOperation, state: ViewState) -> ViewResult<()> {
        let derived = DerivedView::compute(
            &self.dataset,
            &state,
            &self.primary_series,
            self.config.detail_viewport,
            self.config.value_nice_step,
        )?;
        self.state = state;
        self.derived = derived;
        self.revision += 1;

        debug!(
            ?operation,
            revision = self.revision,
            window_start = %self.state.window().start(),
            window_end = %self.state.window().end(),
            visible = self.derived.visible.len(),
            focused = ?self.state.focused_timestamp(),
            "view state updated"
        );
        self.emit_event(ViewEvent::StateChanged { operation });
        Ok(())
    }
}
