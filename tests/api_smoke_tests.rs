use chrono::{DateTime, TimeZone, Utc};
use range_view::api::{ViewEngine, ViewEngineConfig, WindowLabel};
use range_view::core::{Dataset, Record, Viewport};
use range_view::render::NullRenderer;

fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn dataset() -> Dataset {
    let records = (0..92)
        .map(|i| {
            let timestamp = day(10, 1) + chrono::Duration::days(i);
            Record::from_pairs(
                timestamp,
                [
                    ("San Francisco", 50.0 + (i % 10) as f64),
                    ("New York", 40.0 + (i % 7) as f64 * 2.0),
                    ("Austin", 60.0 + (i % 5) as f64 * 3.0),
                ],
            )
        })
        .collect();
    Dataset::new(records).expect("dataset")
}

#[test]
fn engine_smoke_flow() {
    let config = ViewEngineConfig::new(Viewport::new(800, 80), Viewport::new(800, 400));
    let mut engine =
        ViewEngine::new(NullRenderer::default(), dataset(), config).expect("engine init");

    // Initial window spans the last ten records.
    assert_eq!(engine.visible_len(), 10);
    assert_eq!(engine.state().window().start(), day(12, 22));
    assert_eq!(engine.state().window().end(), day(12, 31));
    assert_eq!(engine.state().label(), &WindowLabel::custom());
    assert_eq!(engine.primary_series(), "San Francisco");

    engine.select_dropdown("Last28Days").expect("preset");
    assert_eq!(engine.visible_len(), 29);

    engine.zoom_out().expect("zoom out");
    assert_eq!(engine.state().window().start(), day(12, 1));
    assert_eq!(engine.visible_len(), 31);

    engine.focus_table_row(0).expect("focus row");
    assert_eq!(engine.state().focused_timestamp(), Some(day(12, 1)));

    engine.clear().expect("clear");
    assert_eq!(engine.visible_len(), 92);
    assert_eq!(engine.state().label(), &WindowLabel::Unset);

    engine.render().expect("render should succeed");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_visible_count, 92);
    assert_eq!(renderer.last_description, "All data");
    assert_eq!(renderer.last_revision, Some(4));
}

#[test]
fn detail_value_domain_rescales_with_window() {
    let mut engine = ViewEngine::new(
        NullRenderer::default(),
        dataset(),
        ViewEngineConfig::default(),
    )
    .expect("engine init");

    engine.clear().expect("clear");
    let (_, full_max) = engine.detail_scales().value.domain();
    assert_eq!(full_max, 80.0);

    // A single record whose largest value is Austin's 60.0.
    engine
        .set_custom_window(day(10, 1), day(10, 1))
        .expect("custom window");
    let (min, max) = engine.detail_scales().value.domain();
    assert_eq!((min, max), (0.0, 60.0));
    assert_eq!(engine.detail_scales().value.data_max(), Some(60.0));
}

#[test]
fn overview_time_domain_stays_on_full_span() {
    let mut engine = ViewEngine::new(
        NullRenderer::default(),
        dataset(),
        ViewEngineConfig::default(),
    )
    .expect("engine init");
    let before = engine.overview_scales();

    engine.select_dropdown("Last7Days").expect("preset");
    engine.zoom_out().expect("zoom out");

    assert_eq!(engine.overview_scales(), before);
    assert_eq!(before.time.window(), engine.dataset().span());
}

#[test]
fn empty_dataset_is_rejected_at_construction() {
    let err = Dataset::new(Vec::new()).expect_err("empty dataset");
    assert!(matches!(err, range_view::ViewError::EmptyDataset));
}
