// ABOUTME: Distance and duration extraction helpers for cardio clauses
// ABOUTME: Finds the first number-plus-unit pair and normalizes it to km/miles/m or minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachlog_core::models::units::duration_to_minutes;
use coachlog_core::models::DistanceUnit;

use super::patterns;

/// First distance mentioned in `text`, normalized
#[must_use]
pub fn parse_distance(text: &str) -> Option<(f64, DistanceUnit)> {
    let caps = patterns::distance()?.captures(text)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = DistanceUnit::from_token(caps.get(2)?.as_str())?;
    value.is_finite().then_some((value, unit))
}

/// First duration mentioned in `text`, in minutes
#[must_use]
pub fn parse_duration_minutes(text: &str) -> Option<f64> {
    let caps = patterns::duration()?.captures(text)?;
    let amount = caps.get(1)?.as_str().parse::<f64>().ok()?;
    duration_to_minutes(amount, caps.get(2)?.as_str()).filter(|m| m.is_finite())
}
