use chrono::{DateTime, Duration, TimeZone, Utc};
use range_view::ViewError;
use range_view::api::{
    RangePreset, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewEngine, ViewEngineConfig, ViewSnapshot,
};
use range_view::core::{Dataset, Record};
use serde_json::{Value, json};
use range_view::render::NullRenderer;

fn day(i: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0)
        .single()
        .expect("valid date")
        + Duration::days(i)
}

fn engine() -> ViewEngine<NullRenderer> {
    let records = (0..60)
        .map(|i| {
            Record::from_pairs(
                day(i),
                [("San Francisco", 55.0 + (i % 4) as f64), ("New York", 38.5)],
            )
        })
        .collect();
    let dataset = Dataset::new(records).expect("dataset");
    ViewEngine::new(NullRenderer::default(), dataset, ViewEngineConfig::default())
        .expect("engine init")
}

#[test]
fn snapshot_describes_current_view() {
    let mut engine = engine();
    engine
        .set_preset_range(RangePreset::Last7Days)
        .expect("preset");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.description, "Last 7 days");
    assert_eq!(snapshot.primary_series, "San Francisco");
    assert_eq!(snapshot.visible_timestamps.len(), 8);
    assert_eq!(snapshot.visible_timestamps.first(), Some(&day(52)));
    assert_eq!(snapshot.detail.value.domain(), (0.0, 60.0));
}

#[test]
fn snapshot_json_contract_roundtrip() {
    let mut engine = engine();
    engine.focus_on(day(30)).expect("focus");
    let snapshot = engine.snapshot();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = ViewSnapshot::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, snapshot);
    assert_eq!(
        restored.state.focused_timestamp(),
        Some(day(30)),
        "focused record survives serialization"
    );
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = engine().snapshot();
    let json = serde_json::to_string(&snapshot).expect("bare snapshot");
    let restored = ViewSnapshot::from_json_compat_str(&json).expect("compat parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let snapshot = engine().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize")
        .replace(
            &format!("\"schema_version\": {VIEW_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );

    let err = ViewSnapshot::from_json_compat_str(&json).expect_err("version 99");
    assert!(matches!(err, ViewError::InvalidData(_)));
}

#[test]
fn engine_contract_helper_matches_snapshot_contract() {
    let engine = engine();
    assert_eq!(
        engine
            .snapshot_json_contract_v1_pretty()
            .expect("engine contract"),
        engine
            .snapshot()
            .to_json_contract_v1_pretty()
            .expect("snapshot contract")
    );
}

fn tampered_contract(edit: impl FnOnce(&mut Value)) -> String {
    let mut engine = engine();
    engine.focus_on(day(30)).expect("focus");
    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");
    let mut value: Value = serde_json::from_str(&json).expect("contract is json");
    edit(&mut value["snapshot"]);
    value.to_string()
}

#[test]
fn inverted_snapshot_window_is_rejected() {
    let json = tampered_contract(|snapshot| {
        snapshot["state"]["window"]["start"] = json!("2030-01-01T00:00:00Z");
    });
    let err = ViewSnapshot::from_json_compat_str(&json).expect_err("start after end");
    assert!(matches!(err, ViewError::InvalidData(_)));
}

#[test]
fn snapshot_with_records_outside_window_is_rejected() {
    let json = tampered_contract(|snapshot| {
        snapshot["visible_timestamps"]
            .as_array_mut()
            .expect("timestamps array")
            .push(json!("2022-12-31T00:00:00Z"));
    });
    let err = ViewSnapshot::from_json_compat_str(&json).expect_err("record outside window");
    assert!(err.to_string().contains("outside the window"));
}

#[test]
fn snapshot_with_unsorted_records_is_rejected() {
    let json = tampered_contract(|snapshot| {
        snapshot["visible_timestamps"]
            .as_array_mut()
            .expect("timestamps array")
            .reverse();
    });
    let err = ViewSnapshot::from_json_compat_str(&json).expect_err("descending records");
    assert!(err.to_string().contains("strictly ascending"));
}

#[test]
fn snapshot_with_stale_description_is_rejected() {
    let json = tampered_contract(|snapshot| {
        snapshot["description"] = json!("Last 7 days");
    });
    let err = ViewSnapshot::from_json_compat_str(&json).expect_err("description mismatch");
    assert!(matches!(err, ViewError::InvalidData(_)));
}
