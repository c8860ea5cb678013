// ABOUTME: ActivityKind, the closed set of categories a parsed activity belongs to
// ABOUTME: Folds the near-synonyms used by callers (food, workout, exercise) onto one canonical set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Category of a parsed activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Body weight reading
    Weight,
    /// Food intake
    #[serde(alias = "food")]
    Nutrition,
    /// Running, walking, cycling or generic exercise
    #[serde(alias = "workout", alias = "exercise")]
    Cardio,
    /// Resistance training
    Strength,
    /// Hours slept
    Sleep,
    /// Self-reported mood
    Mood,
    /// Self-reported energy level
    Energy,
    /// Water intake
    Water,
    /// Clause matched no rule
    Unknown,
}

impl ActivityKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Weight,
        Self::Nutrition,
        Self::Cardio,
        Self::Strength,
        Self::Sleep,
        Self::Mood,
        Self::Energy,
        Self::Water,
        Self::Unknown,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Nutrition => "nutrition",
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Sleep => "sleep",
            Self::Mood => "mood",
            Self::Energy => "energy",
            Self::Water => "water",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "nutrition" | "food" | "meal" => Ok(Self::Nutrition),
            "cardio" | "workout" | "exercise" => Ok(Self::Cardio),
            "strength" | "lifting" => Ok(Self::Strength),
            "sleep" => Ok(Self::Sleep),
            "mood" => Ok(Self::Mood),
            "energy" => Ok(Self::Energy),
            "water" => Ok(Self::Water),
            "unknown" => Ok(Self::Unknown),
            other => Err(AppError::invalid_format(format!(
                "Unrecognized activity type '{other}'"
            ))),
        }
    }
}
