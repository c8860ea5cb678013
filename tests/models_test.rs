// ABOUTME: Tests for core activity models, unit normalization and error codes
// ABOUTME: Validates kind synonyms, confidence clamping invariants and serde representations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use coachlog::models::units::duration_to_minutes;
use coachlog::models::{
    ActivityFields, ActivityKind, DistanceUnit, ParseRequest, ParsedActivity, SleepFields,
    VolumeUnit, WeightUnit,
};
use coachlog::{AppError, ErrorCode};

#[test]
fn test_kind_from_str_folds_synonyms() {
    assert_eq!("food".parse::<ActivityKind>().unwrap(), ActivityKind::Nutrition);
    assert_eq!("Nutrition".parse::<ActivityKind>().unwrap(), ActivityKind::Nutrition);
    assert_eq!("workout".parse::<ActivityKind>().unwrap(), ActivityKind::Cardio);
    assert_eq!("exercise".parse::<ActivityKind>().unwrap(), ActivityKind::Cardio);
    assert_eq!(" WEIGHT ".parse::<ActivityKind>().unwrap(), ActivityKind::Weight);
    assert_eq!("lifting".parse::<ActivityKind>().unwrap(), ActivityKind::Strength);
}

#[test]
fn test_kind_from_str_rejects_unknown_names() {
    let err = "yoga".parse::<ActivityKind>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.http_status(), 400);
}

#[test]
fn test_kind_display_round_trips_through_from_str() {
    for kind in ActivityKind::ALL {
        assert_eq!(kind.to_string().parse::<ActivityKind>().unwrap(), kind);
    }
}

#[test]
fn test_kind_serde_accepts_aliases() {
    let kind: ActivityKind = serde_json::from_str("\"food\"").unwrap();
    assert_eq!(kind, ActivityKind::Nutrition);
    assert_eq!(
        serde_json::to_string(&ActivityKind::Nutrition).unwrap(),
        "\"nutrition\""
    );
}

#[test]
fn test_request_deserializes_camel_case() {
    let request: ParseRequest = serde_json::from_str(
        r#"{"text": "175", "occurredAt": "2025-01-01T08:00:00Z", "typeHint": "weight"}"#,
    )
    .unwrap();
    assert_eq!(request.text, "175");
    assert_eq!(request.type_hint, Some(ActivityKind::Weight));
    assert!(request.occurred_at.is_some());

    let bare: ParseRequest = serde_json::from_str(r#"{"text": "ran 5k"}"#).unwrap();
    assert_eq!(bare, ParseRequest::new("ran 5k"));
}

#[test]
fn test_unknown_confidence_is_capped() {
    let activity = ParsedActivity::new(ActivityFields::unknown("???"), 0.9, "???", 0);
    assert_eq!(activity.kind(), ActivityKind::Unknown);
    assert!(activity.confidence() <= 0.2);
}

#[test]
fn test_deserialized_activity_is_clamped() {
    let unknown: ParsedActivity = serde_json::from_str(
        r#"{"kind":"unknown","fields":{"text":"???"},"confidence":0.9,"sourceText":"???","rank":0}"#,
    )
    .unwrap();
    assert_eq!(unknown.kind(), ActivityKind::Unknown);
    assert!(unknown.confidence() <= 0.2);

    let sleep: ParsedActivity = serde_json::from_str(
        r#"{"kind":"sleep","fields":{"hours":8.0},"confidence":3.5,"sourceText":"slept 8","rank":2}"#,
    )
    .unwrap();
    assert_eq!(sleep.confidence(), 1.0);
    assert_eq!(sleep.rank(), 2);
    assert_eq!(sleep.source_text(), "slept 8");
}

#[test]
fn test_confidence_is_clamped_to_unit_interval() {
    let sleep = || ActivityFields::Sleep(SleepFields { hours: 8.0 });
    assert_eq!(ParsedActivity::new(sleep(), 1.7, "x", 0).confidence(), 1.0);
    assert_eq!(ParsedActivity::new(sleep(), -0.3, "x", 0).confidence(), 0.0);
    assert_eq!(ParsedActivity::new(sleep(), f64::NAN, "x", 0).confidence(), 0.0);
}

#[test]
fn test_weight_unit_tokens() {
    assert_eq!(WeightUnit::from_token(Some("KG")), WeightUnit::Kg);
    assert_eq!(WeightUnit::from_token(Some("kilos")), WeightUnit::Kg);
    assert_eq!(WeightUnit::from_token(Some("pounds")), WeightUnit::Lbs);
    assert_eq!(WeightUnit::from_token(None), WeightUnit::Lbs);
}

#[test]
fn test_volume_unit_tokens() {
    assert_eq!(VolumeUnit::from_token("L"), VolumeUnit::Liters);
    assert_eq!(VolumeUnit::from_token("liter"), VolumeUnit::Liters);
    assert_eq!(VolumeUnit::from_token("cup"), VolumeUnit::Cups);
    assert_eq!(VolumeUnit::from_token("ml"), VolumeUnit::Ml);
    assert_eq!(VolumeUnit::from_token("oz"), VolumeUnit::Oz);
    assert_eq!(VolumeUnit::from_token("glass"), VolumeUnit::Oz);
}

#[test]
fn test_distance_and_duration_tokens() {
    assert_eq!(DistanceUnit::from_token("k"), Some(DistanceUnit::Km));
    assert_eq!(DistanceUnit::from_token("mi"), Some(DistanceUnit::Miles));
    assert_eq!(DistanceUnit::from_token("meters"), Some(DistanceUnit::Meters));
    assert_eq!(DistanceUnit::from_token("furlong"), None);
    assert_eq!(
        serde_json::to_string(&DistanceUnit::Meters).unwrap(),
        "\"m\""
    );

    assert_eq!(duration_to_minutes(2.0, "hrs"), Some(120.0));
    assert_eq!(duration_to_minutes(30.0, "mins"), Some(30.0));
    assert_eq!(duration_to_minutes(3.0, "days"), None);
}

#[test]
fn test_error_codes_map_to_http_status() {
    assert_eq!(AppError::missing_field("text").http_status(), 400);
    assert_eq!(AppError::out_of_range("too long").http_status(), 400);
    assert_eq!(AppError::config_invalid("bad").http_status(), 500);

    let err = AppError::missing_field("text");
    assert_eq!(err.details["field"], "text");
    assert!(err.to_string().contains("required"));
}
