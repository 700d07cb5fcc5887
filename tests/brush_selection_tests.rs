use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use range_view::api::{Transition, ViewEngine, ViewEngineConfig, WindowLabel};
use range_view::core::{Dataset, Record, Viewport};
use range_view::interaction::{BrushPixelBounds, Gesture};
use range_view::render::NullRenderer;

fn at(i: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date")
        + chrono::Duration::days(i)
}

/// Ten daily records; `a` climbs 5, 15, ..., 95 and `b` stays flat.
fn engine() -> ViewEngine<NullRenderer> {
    let records = (0..10)
        .map(|i| Record::from_pairs(at(i), [("a", 5.0 + 10.0 * i as f64), ("b", 1.0)]))
        .collect();
    let dataset = Dataset::new(records).expect("dataset");
    let config = ViewEngineConfig::new(Viewport::new(1000, 100), Viewport::new(800, 400))
        .with_primary_series("a");
    ViewEngine::new(NullRenderer::default(), dataset, config).expect("engine init")
}

fn x_of(engine: &ViewEngine<NullRenderer>, i: i64) -> f64 {
    let overview = engine.overview_scales();
    overview
        .time
        .time_to_pixel(at(i), overview.viewport)
        .expect("time to pixel")
}

#[test]
fn brush_converts_pixels_through_overview_scales() {
    let engine = engine();
    assert_eq!(engine.overview_scales().value.domain(), (0.0, 100.0));

    let region = engine
        .brush_region(BrushPixelBounds::new(x_of(&engine, 2), x_of(&engine, 6), 60.0, 10.0))
        .expect("region");
    assert_eq!(region.window.start(), at(2));
    assert_eq!(region.window.end(), at(6));
    assert_relative_eq!(region.value_low.expect("lower bound"), 40.0, epsilon = 1e-9);
    assert_relative_eq!(region.value_high.expect("upper bound"), 90.0, epsilon = 1e-9);

    let full_height = engine
        .brush_region(BrushPixelBounds::horizontal(x_of(&engine, 2), x_of(&engine, 6), 100.0))
        .expect("region");
    assert_eq!(full_height.value_low, None);
    assert_eq!(full_height.value_high, None);
}

#[test]
fn brush_edges_are_exclusive() {
    let mut engine = engine();
    let bounds = BrushPixelBounds::horizontal(x_of(&engine, 2), x_of(&engine, 6), 100.0);

    let transition = engine
        .set_brush_selection(Some(bounds))
        .expect("brush applies");
    assert_eq!(transition, Transition::Applied);

    let visible: Vec<_> = engine.visible_records().map(|r| r.timestamp).collect();
    assert_eq!(visible, vec![at(3), at(4), at(5)]);
    assert_eq!(engine.state().window().end(), at(6));
    assert!(!visible.contains(&at(6)));
    assert_eq!(engine.state().label(), &WindowLabel::custom());
}

#[test]
fn brush_value_band_filters_primary_series() {
    let mut engine = engine();
    let bounds = BrushPixelBounds::new(x_of(&engine, 0), x_of(&engine, 9), 60.0, 10.0);

    engine
        .set_brush_selection(Some(bounds))
        .expect("brush applies");

    let values: Vec<f64> = engine
        .visible_records()
        .filter_map(|r| r.value("a"))
        .collect();
    assert_eq!(values, vec![45.0, 55.0, 65.0, 75.0, 85.0]);
    assert!(engine.state().brush().is_some());
}

#[test]
fn reversed_drag_is_normalized() {
    let mut forward = engine();
    let mut backward = engine();
    let (x0, x1) = (x_of(&forward, 1), x_of(&forward, 7));

    forward
        .set_brush_selection(Some(BrushPixelBounds::new(x0, x1, 0.0, 100.0)))
        .expect("forward");
    backward
        .set_brush_selection(Some(BrushPixelBounds::new(x1, x0, 100.0, 0.0)))
        .expect("backward");

    assert_eq!(forward.state(), backward.state());
}

#[test]
fn cleared_and_collapsed_brushes_are_ignored() {
    let mut engine = engine();
    engine.clear().expect("clear");
    let before = engine.state().clone();
    let revision = engine.revision();

    assert_eq!(
        engine.set_brush_selection(None).expect("cleared"),
        Transition::Ignored
    );
    assert_eq!(
        engine
            .set_brush_selection(Some(BrushPixelBounds::horizontal(250.0, 250.0, 100.0)))
            .expect("collapsed"),
        Transition::Ignored
    );
    assert_eq!(
        engine
            .set_brush_selection(Some(BrushPixelBounds::horizontal(100.0, 100.000_000_1, 100.0)))
            .expect("sub-millisecond"),
        Transition::Ignored
    );
    assert_eq!(
        engine
            .handle_gesture(Gesture::BrushMoved(None))
            .expect("gesture"),
        Transition::Ignored
    );

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.revision(), revision);
}

#[test]
fn non_finite_brush_bounds_are_rejected() {
    let mut engine = engine();
    let before = engine.state().clone();

    engine
        .set_brush_selection(Some(BrushPixelBounds::horizontal(f64::NAN, 10.0, 100.0)))
        .expect_err("nan pixel");
    assert_eq!(engine.state(), &before);
}

#[test]
fn later_operations_supersede_the_brush() {
    let mut engine = engine();
    let bounds = BrushPixelBounds::new(x_of(&engine, 0), x_of(&engine, 9), 60.0, 10.0);
    engine.set_brush_selection(Some(bounds)).expect("brush");

    engine.zoom_out().expect("zoom out");
    assert!(engine.state().brush().is_none());
    assert_eq!(engine.visible_len(), 10);
}

/// Twenty daily records: ten at 50.0 followed by ten at 5.0, so the default
/// window (last ten records) never sees the early maximum.
fn engine_with_early_peak() -> ViewEngine<NullRenderer> {
    let records = (0..20)
        .map(|i| {
            let value = if i < 10 { 50.0 } else { 5.0 };
            Record::from_pairs(at(i), [("a", value)])
        })
        .collect();
    let dataset = Dataset::new(records).expect("dataset");
    ViewEngine::new(NullRenderer::default(), dataset, ViewEngineConfig::default())
        .expect("engine init")
}

#[test]
fn overview_value_axis_covers_whole_dataset() {
    let engine = engine_with_early_peak();

    assert_eq!(engine.visible_len(), 10);
    assert_eq!(engine.detail_scales().value.domain(), (0.0, 10.0));
    assert_eq!(engine.overview_scales().value.domain(), (0.0, 50.0));
    assert_eq!(engine.overview_scales().value.data_max(), Some(50.0));
}

#[test]
fn full_height_brush_keeps_records_above_default_window_maximum() {
    let mut engine = engine_with_early_peak();
    let strip_height = f64::from(engine.overview_scales().viewport.height);
    let bounds = BrushPixelBounds::horizontal(
        x_of(&engine, 0) - 1.0,
        x_of(&engine, 9) + 1.0,
        strip_height,
    );

    let transition = engine
        .set_brush_selection(Some(bounds))
        .expect("brush applies");

    assert_eq!(transition, Transition::Applied);
    let visible: Vec<_> = engine.visible_records().map(|r| r.timestamp).collect();
    assert_eq!(visible, (0..10).map(at).collect::<Vec<_>>());
    assert_eq!(engine.detail_scales().value.domain(), (0.0, 50.0));
}

#[test]
fn brush_below_strip_top_still_excludes_peak_values() {
    let mut engine = engine_with_early_peak();
    let overview = engine.overview_scales();
    // Upper edge at 49.0, so the 50.0 records sit above the band.
    let y_top = overview
        .value
        .value_to_pixel(49.0, overview.viewport)
        .expect("value to pixel");
    let bounds = BrushPixelBounds::new(
        x_of(&engine, 0) - 1.0,
        x_of(&engine, 19) + 1.0,
        y_top,
        f64::from(overview.viewport.height),
    );

    engine.set_brush_selection(Some(bounds)).expect("brush applies");

    let visible: Vec<_> = engine.visible_records().map(|r| r.timestamp).collect();
    assert_eq!(visible, (10..20).map(at).collect::<Vec<_>>());
}
