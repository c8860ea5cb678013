// ABOUTME: Invariant checks run across a broad set of realistic and degenerate inputs
// ABOUTME: Every outcome is non-empty, ranked densely and scored within its kind's bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachlog::models::{ActivityFields, NutritionFields};
use coachlog::{parse, ActivityKind};

const INPUTS: &[&str] = &[
    "",
    "   ",
    ",,,",
    "and and and",
    "175",
    "weight: 80.5 kg",
    "energy level is 11",
    "sleep 0 hours",
    "3 liters of water",
    "2 cups rice",
    "ate",
    "meal",
    "lunch and dinner",
    "ran",
    "ran 0.5 miles in 1 hour",
    "did 5x5 squats at 100 kg",
    "feeling terrible, tired and bad",
    "🏃 5k 🍕",
    "WEIGHT 175 LBS; RAN 5K; ATE PIZZA",
    "the quick brown fox",
    "1e400 lbs",
    "weight 175, ran 5k, ate chicken salad, slept 8 hours, energy 7, 16 oz water, feeling good",
];

#[test]
fn test_outcomes_are_never_empty() {
    for text in INPUTS {
        assert!(!parse(text).activities().is_empty(), "empty outcome for {text:?}");
    }
}

#[test]
fn test_ranks_are_dense_and_ordered() {
    for text in INPUTS {
        let outcome = parse(text);
        for (index, activity) in outcome.activities().iter().enumerate() {
            assert_eq!(activity.rank(), index, "rank gap for {text:?}");
        }
    }
}

#[test]
fn test_confidence_bounds_hold() {
    for text in INPUTS {
        for activity in parse(text).activities() {
            let confidence = activity.confidence();
            assert!((0.0..=1.0).contains(&confidence), "{text:?}: {confidence}");
            if activity.kind() == ActivityKind::Unknown {
                assert!(confidence <= 0.2, "{text:?}: unknown scored {confidence}");
            }
        }
    }
}

#[test]
fn test_fields_match_kind() {
    for text in INPUTS {
        for activity in parse(text).activities() {
            assert_eq!(activity.fields().kind(), activity.kind());
        }
    }
}

#[test]
fn test_nutrition_always_has_items() {
    for text in INPUTS {
        for activity in parse(text).activities() {
            if let ActivityFields::Nutrition(NutritionFields { items, .. }) = activity.fields() {
                assert!(!items.is_empty(), "no items for {text:?}");
            }
        }
    }
}

#[test]
fn test_numeric_fields_are_finite() {
    for text in INPUTS {
        let json = serde_json::to_string(&parse(text)).unwrap();
        assert!(!json.contains("null"), "non-finite number in {text:?}: {json}");
    }
}
