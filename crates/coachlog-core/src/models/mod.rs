// ABOUTME: Activity data models module organizing kinds, units, fields and parse results
// ABOUTME: Re-exports everything a caller needs to hold or serialize a parse result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Closed activity category enumeration
pub mod kind;
/// Normalized measurement units
pub mod units;
/// Per-kind field payloads
pub mod fields;
/// Requests, parsed activities and outcomes
pub mod activity;

pub use activity::{HintResolution, ParseOutcome, ParseRequest, ParsedActivity};
pub use fields::{
    ActivityFields, CardioActivity, CardioFields, EnergyFields, FoodItem, MealType, Mood,
    MoodFields, NutritionFields, SleepFields, StrengthFields, UnknownFields, WaterFields,
    WeightFields,
};
pub use kind::ActivityKind;
pub use units::{DistanceUnit, VolumeUnit, WeightUnit};
