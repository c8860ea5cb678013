// ABOUTME: Normalized measurement units carried by parsed activity fields
// ABOUTME: Weight, volume and distance units with lossy parsing from free-text tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Minutes per hour, used when normalizing durations
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Body weight or lifted load unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Normalize a unit token. Anything starting with "k" is kilograms;
    /// an absent token or any pound spelling is pounds.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.trim().to_lowercase().starts_with('k') => Self::Kg,
            _ => Self::Lbs,
        }
    }

    /// Canonical token
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }
}

/// Liquid volume unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    /// Fluid ounces
    Oz,
    /// Milliliters
    Ml,
    /// Cups
    Cups,
    /// Liters
    Liters,
}

impl VolumeUnit {
    /// Normalize a unit token: `liter(s)`/`l` to liters, `cup(s)` to cups,
    /// `ml` to milliliters, anything else to ounces.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "l" | "liter" | "liters" => Self::Liters,
            "cup" | "cups" => Self::Cups,
            "ml" => Self::Ml,
            _ => Self::Oz,
        }
    }

    /// Canonical token
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oz => "oz",
            Self::Ml => "ml",
            Self::Cups => "cups",
            Self::Liters => "liters",
        }
    }
}

/// Distance unit for cardio activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers
    Km,
    /// Miles
    Miles,
    /// Meters
    #[serde(rename = "m")]
    Meters,
}

impl DistanceUnit {
    /// Normalize a unit token: `k`/`km` to kilometers, `mi`/`mile(s)` to
    /// miles, `m`/`meter(s)` to meters. Unrecognized tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "k" | "km" => Some(Self::Km),
            "mi" | "mile" | "miles" => Some(Self::Miles),
            "m" | "meter" | "meters" => Some(Self::Meters),
            _ => None,
        }
    }

    /// Canonical token
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Miles => "miles",
            Self::Meters => "m",
        }
    }
}

/// Convert a duration token and amount to minutes. Hour spellings multiply
/// by sixty; minute spellings pass through. Unrecognized tokens yield `None`.
#[must_use]
pub fn duration_to_minutes(amount: f64, token: &str) -> Option<f64> {
    match token.trim().to_lowercase().as_str() {
        "min" | "mins" | "minute" | "minutes" => Some(amount),
        "hour" | "hours" | "hr" | "hrs" => Some(amount * MINUTES_PER_HOUR),
        _ => None,
    }
}
