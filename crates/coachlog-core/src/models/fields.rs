// ABOUTME: Strongly-typed field payloads, one struct per activity kind
// ABOUTME: ActivityFields is the closed sum type carried by every ParsedActivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::kind::ActivityKind;
use super::units::{DistanceUnit, VolumeUnit, WeightUnit};

/// Body weight reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightFields {
    /// Numeric reading
    pub value: f64,
    /// Normalized unit
    pub unit: WeightUnit,
}

/// Energy level, usually on a 1-10 scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyFields {
    /// Reported level
    pub level: u32,
}

/// Sleep duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepFields {
    /// Hours slept
    pub hours: f64,
}

/// Water intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterFields {
    /// Quantity consumed
    pub amount: f64,
    /// Normalized volume unit
    pub unit: VolumeUnit,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals, also the default when no meal word is present
    Snack,
}

impl MealType {
    /// Meal types in keyword priority order
    pub const PRIORITY: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Canonical keyword for this meal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// Individual food item within a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
}

impl FoodItem {
    /// Create a food item
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Food intake. `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFields {
    /// Meal the food belongs to
    pub meal: MealType,
    /// Foods mentioned, in order of appearance
    pub items: Vec<FoodItem>,
}

/// Cardio modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardioActivity {
    /// Running, including "ran" and "run"
    Running,
    /// Walking
    Walking,
    /// Cycling
    Cycling,
    /// Exercise with no recognized modality
    Exercise,
}

impl CardioActivity {
    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Exercise => "exercise",
        }
    }
}

/// Cardio session. Distance and duration are independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioFields {
    /// Modality
    pub activity: CardioActivity,
    /// Distance covered
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_value: Option<f64>,
    /// Unit for `distance_value`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_unit: Option<DistanceUnit>,
    /// Duration normalized to minutes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_minutes: Option<f64>,
}

/// Resistance training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthFields {
    /// Named lift, or "strength training" when none is recognized
    pub exercise: String,
    /// Number of sets
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reps: Option<u32>,
    /// Load lifted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub load_value: Option<f64>,
    /// Unit for `load_value`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub load_unit: Option<WeightUnit>,
}

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Great
    Great,
    /// Good
    Good,
    /// Bad
    Bad,
    /// Terrible
    Terrible,
    /// Tired
    Tired,
    /// Default when no mood word is recognized
    Okay,
}

impl Mood {
    /// Recognizable moods in match priority order (`Okay` is the fallback)
    pub const PRIORITY: [Self; 5] = [
        Self::Great,
        Self::Good,
        Self::Bad,
        Self::Terrible,
        Self::Tired,
    ];

    /// Canonical keyword
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Terrible => "terrible",
            Self::Tired => "tired",
            Self::Okay => "okay",
        }
    }
}

/// Mood entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodFields {
    /// Detected mood
    pub mood: Mood,
    /// Full original clause, unmodified
    pub notes: String,
}

/// Unmatched clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownFields {
    /// Original clause
    pub text: String,
}

/// Kind-specific payload. The variant determines the activity's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum ActivityFields {
    /// Body weight
    Weight(WeightFields),
    /// Food intake
    Nutrition(NutritionFields),
    /// Cardio session
    Cardio(CardioFields),
    /// Resistance training
    Strength(StrengthFields),
    /// Sleep duration
    Sleep(SleepFields),
    /// Mood
    Mood(MoodFields),
    /// Energy level
    Energy(EnergyFields),
    /// Water intake
    Water(WaterFields),
    /// Unmatched clause
    Unknown(UnknownFields),
}

impl ActivityFields {
    /// Kind this payload belongs to
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Weight(_) => ActivityKind::Weight,
            Self::Nutrition(_) => ActivityKind::Nutrition,
            Self::Cardio(_) => ActivityKind::Cardio,
            Self::Strength(_) => ActivityKind::Strength,
            Self::Sleep(_) => ActivityKind::Sleep,
            Self::Mood(_) => ActivityKind::Mood,
            Self::Energy(_) => ActivityKind::Energy,
            Self::Water(_) => ActivityKind::Water,
            Self::Unknown(_) => ActivityKind::Unknown,
        }
    }

    /// Payload for an unmatched clause
    #[must_use]
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::Unknown(UnknownFields { text: text.into() })
    }
}
