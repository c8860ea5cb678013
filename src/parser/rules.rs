// ABOUTME: Ordered rule cascade that classifies one clause into a typed activity payload
// ABOUTME: First matching rule wins; unmatched clauses fall through to Unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Clause Cascade
//!
//! Rules are evaluated strictly in table order and the first one that
//! returns a payload wins. Several rules share trigger words, so the order
//! is part of the contract:
//!
//! 1. weight (anchored, whole clause)
//! 2. energy
//! 3. sleep
//! 4. water (quantity + unit, guarded by the word "water")
//! 5. nutrition
//! 6. strength
//! 7. cardio
//! 8. mood
//!
//! Anything else becomes `Unknown`.

use coachlog_core::constants::confidence::{
    GUARDED_QUANTITY_MATCH, KEYWORD_EXTRACTION, KEYWORD_ONLY, STRUCTURED_MATCH, UNKNOWN,
};
use coachlog_core::constants::vocabulary::{
    CYCLING_WORDS, EATING_VERBS, FEELING_WORDS, FOOD_WORDS, GENERIC_EXERCISE_WORDS,
    GENERIC_STRENGTH_EXERCISE, LIFTING_WORDS, PLACEHOLDER_FOOD, RUNNING_WORDS,
    STRENGTH_VOLUME_WORDS, WALKING_WORDS,
};
use coachlog_core::models::{
    ActivityFields, ActivityKind, CardioActivity, CardioFields, EnergyFields, FoodItem, MealType,
    Mood, MoodFields, NutritionFields, SleepFields, StrengthFields, VolumeUnit, WaterFields,
    WeightFields, WeightUnit,
};
use regex::{Captures, Regex};
use std::num::IntErrorKind;

use super::patterns;
use super::units::{parse_distance, parse_duration_minutes};

/// A clause prepared for matching: original text, lowercase copy and its words
#[derive(Debug)]
pub struct Clause<'a> {
    original: &'a str,
    words: Vec<String>,
}

impl<'a> Clause<'a> {
    /// Prepare a clause for matching. Words are lowercase runs of letters,
    /// digits and apostrophes, so punctuation never glues two words together.
    #[must_use]
    pub fn new(original: &'a str) -> Self {
        let words = original
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { original, words }
    }

    /// Clause text as supplied, trimmed
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.original.trim()
    }

    /// Whether the clause contains `word` as a whole word
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Whether the clause contains any of `words` as a whole word
    #[must_use]
    pub fn has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.has_word(w))
    }
}

/// Result of running the cascade over one clause
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Typed payload; its variant is the activity kind
    pub fields: ActivityFields,
    /// Confidence assigned by the winning rule
    pub confidence: f64,
    /// Name of the winning rule, for logging
    pub rule: &'static str,
}

impl Classification {
    /// Kind of the winning payload
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.fields.kind()
    }
}

/// One cascade entry: a matcher that either extracts a payload or declines
struct Rule {
    name: &'static str,
    confidence: f64,
    matcher: fn(&Clause<'_>) -> Option<ActivityFields>,
}

const CASCADE: [Rule; 8] = [
    Rule {
        name: "weight",
        confidence: STRUCTURED_MATCH,
        matcher: match_weight,
    },
    Rule {
        name: "energy",
        confidence: STRUCTURED_MATCH,
        matcher: match_energy,
    },
    Rule {
        name: "sleep",
        confidence: STRUCTURED_MATCH,
        matcher: match_sleep,
    },
    Rule {
        name: "water",
        confidence: GUARDED_QUANTITY_MATCH,
        matcher: match_water,
    },
    Rule {
        name: "nutrition",
        confidence: KEYWORD_EXTRACTION,
        matcher: match_nutrition,
    },
    Rule {
        name: "strength",
        confidence: KEYWORD_EXTRACTION,
        matcher: match_strength,
    },
    Rule {
        name: "cardio",
        confidence: KEYWORD_EXTRACTION,
        matcher: match_cardio,
    },
    Rule {
        name: "mood",
        confidence: KEYWORD_ONLY,
        matcher: match_mood,
    },
];

/// Classify a single clause. Total: every input yields a classification.
#[must_use]
pub fn classify_clause(text: &str) -> Classification {
    let clause = Clause::new(text);
    CASCADE
        .iter()
        .find_map(|rule| {
            (rule.matcher)(&clause).map(|fields| Classification {
                fields,
                confidence: rule.confidence,
                rule: rule.name,
            })
        })
        .unwrap_or_else(|| Classification {
            fields: ActivityFields::unknown(clause.text()),
            confidence: UNKNOWN,
            rule: "unknown",
        })
}

/// Parse capture group `index` as a finite decimal
fn capture_f64(caps: &Captures<'_>, index: usize) -> Option<f64> {
    caps.get(index)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse capture group `index` as an unsigned integer, saturating at
/// `u32::MAX` so an oversized count still yields a structured match
fn capture_u32(caps: &Captures<'_>, index: usize) -> Option<u32> {
    match caps.get(index)?.as_str().parse::<u32>() {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

fn captures<'t>(re: Option<&Regex>, text: &'t str) -> Option<Captures<'t>> {
    re?.captures(text)
}

fn match_weight(clause: &Clause<'_>) -> Option<ActivityFields> {
    let caps = captures(patterns::weight(), clause.text())?;
    let value = capture_f64(&caps, 1)?;
    let unit = WeightUnit::from_token(caps.get(2).map(|m| m.as_str()));
    Some(ActivityFields::Weight(WeightFields { value, unit }))
}

fn match_energy(clause: &Clause<'_>) -> Option<ActivityFields> {
    let caps = captures(patterns::energy(), clause.text())?;
    let level = capture_u32(&caps, 1)?;
    Some(ActivityFields::Energy(EnergyFields { level }))
}

fn match_sleep(clause: &Clause<'_>) -> Option<ActivityFields> {
    let caps = captures(patterns::sleep(), clause.text())?;
    let hours = capture_f64(&caps, 1)?;
    Some(ActivityFields::Sleep(SleepFields { hours }))
}

fn match_water(clause: &Clause<'_>) -> Option<ActivityFields> {
    // Plain quantities ("2 cups rice") are not water without the word itself
    if !patterns::water_word().is_some_and(|re| re.is_match(clause.text())) {
        return None;
    }
    let caps = captures(patterns::water_quantity(), clause.text())?;
    let amount = capture_f64(&caps, 1)?;
    let unit = VolumeUnit::from_token(caps.get(2)?.as_str());
    Some(ActivityFields::Water(WaterFields { amount, unit }))
}

fn match_nutrition(clause: &Clause<'_>) -> Option<ActivityFields> {
    let meal = MealType::PRIORITY
        .into_iter()
        .find(|meal| clause.has_word(meal.as_str()));

    // Food nouns alone do not make a clause a meal ("ran 5k with a banana")
    if meal.is_none() && !clause.has_any(EATING_VERBS) {
        return None;
    }

    let mut items: Vec<FoodItem> = Vec::new();
    for word in clause.words.iter().filter(|w| FOOD_WORDS.contains(&w.as_str())) {
        if !items.iter().any(|item| item.name == *word) {
            items.push(FoodItem::new(word.as_str()));
        }
    }

    if items.is_empty() {
        items.push(FoodItem::new(PLACEHOLDER_FOOD));
    }

    Some(ActivityFields::Nutrition(NutritionFields {
        meal: meal.unwrap_or(MealType::Snack),
        items,
    }))
}

fn match_strength(clause: &Clause<'_>) -> Option<ActivityFields> {
    let text = clause.text();
    let named = patterns::lifts()
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, name)| *name);
    // Sets and reps alone are ambiguous next to a cardio verb ("ran 3 sets of sprints")
    let triggered = named.is_some()
        || clause.has_any(LIFTING_WORDS)
        || (!is_cardio_clause(clause) && clause.has_any(STRENGTH_VOLUME_WORDS));
    if !triggered {
        return None;
    }

    let (sets, reps) = captures(patterns::sets_by_reps(), text).map_or_else(
        || {
            (
                captures(patterns::sets(), text).and_then(|c| capture_u32(&c, 1)),
                captures(patterns::reps(), text).and_then(|c| capture_u32(&c, 1)),
            )
        },
        |caps| (capture_u32(&caps, 1), capture_u32(&caps, 2)),
    );

    let load = captures(patterns::load(), text).and_then(|caps| {
        let value = capture_f64(&caps, 1)?;
        Some((value, WeightUnit::from_token(caps.get(2).map(|m| m.as_str()))))
    });

    Some(ActivityFields::Strength(StrengthFields {
        exercise: named.unwrap_or(GENERIC_STRENGTH_EXERCISE).to_owned(),
        sets,
        reps,
        load_value: load.map(|(value, _)| value),
        load_unit: load.map(|(_, unit)| unit),
    }))
}

fn is_cardio_clause(clause: &Clause<'_>) -> bool {
    clause.has_any(RUNNING_WORDS) || clause.has_any(WALKING_WORDS) || clause.has_any(CYCLING_WORDS)
}

fn match_cardio(clause: &Clause<'_>) -> Option<ActivityFields> {
    let activity = if clause.has_any(RUNNING_WORDS) {
        CardioActivity::Running
    } else if clause.has_any(WALKING_WORDS) {
        CardioActivity::Walking
    } else if clause.has_any(CYCLING_WORDS) {
        CardioActivity::Cycling
    } else if clause.has_any(GENERIC_EXERCISE_WORDS) {
        CardioActivity::Exercise
    } else {
        return None;
    };

    let text = clause.text();
    let distance = parse_distance(text);
    Some(ActivityFields::Cardio(CardioFields {
        activity,
        distance_value: distance.map(|(value, _)| value),
        distance_unit: distance.map(|(_, unit)| unit),
        duration_minutes: parse_duration_minutes(text),
    }))
}

fn match_mood(clause: &Clause<'_>) -> Option<ActivityFields> {
    if !clause.has_any(FEELING_WORDS) {
        return None;
    }
    let mood = Mood::PRIORITY
        .into_iter()
        .find(|mood| clause.has_word(mood.as_str()))
        .unwrap_or(Mood::Okay);
    Some(ActivityFields::Mood(MoodFields {
        mood,
        notes: clause.text().to_owned(),
    }))
}
