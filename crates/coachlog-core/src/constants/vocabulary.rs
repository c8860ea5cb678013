// ABOUTME: Fixed keyword vocabularies recognized by the activity classifier
// ABOUTME: Food nouns, eating verbs, cardio verbs, lift names and mood words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! All entries are lowercase and matched as whole words. Where a list is
//! documented as ordered, earlier entries win.

/// Verbs that mark a clause as food intake
pub const EATING_VERBS: &[&str] = &["ate", "eat", "eating", "eaten"];

/// Food nouns collected as nutrition items
pub const FOOD_WORDS: &[&str] = &[
    "eggs",
    "egg",
    "toast",
    "bread",
    "oatmeal",
    "cereal",
    "yogurt",
    "chicken",
    "beef",
    "steak",
    "salmon",
    "fish",
    "tuna",
    "tofu",
    "rice",
    "pasta",
    "pizza",
    "burger",
    "sandwich",
    "salad",
    "soup",
    "vegetables",
    "broccoli",
    "potatoes",
    "apple",
    "banana",
    "berries",
    "avocado",
    "nuts",
    "cheese",
];

/// Placeholder item name emitted when no vocabulary food is present
pub const PLACEHOLDER_FOOD: &str = "meal";

/// Running verbs (highest cardio priority)
pub const RUNNING_WORDS: &[&str] = &["ran", "run", "running"];

/// Walking verbs
pub const WALKING_WORDS: &[&str] = &["walked", "walking"];

/// Cycling verbs
pub const CYCLING_WORDS: &[&str] = &["cycled", "cycling"];

/// Generic exercise words that trigger cardio without naming a modality
pub const GENERIC_EXERCISE_WORDS: &[&str] = &["exercise", "exercised", "workout"];

/// Named lifts in priority order, paired with the canonical exercise name.
/// Each pattern is a regex fragment matched on word boundaries.
pub const LIFT_NAMES: &[(&str, &str)] = &[
    (r"bench\s+press(?:ed)?|bench", "bench press"),
    (r"overhead\s+press", "overhead press"),
    (r"deadlifts?", "deadlift"),
    (r"squats?", "squat"),
    (r"pull-?ups?", "pull-up"),
    (r"push-?ups?", "push-up"),
    (r"lunges", "lunge"),
    (r"curls", "curl"),
];

/// Lifting verbs that trigger the strength rule on their own
pub const LIFTING_WORDS: &[&str] = &["lifted", "lifting"];

/// Volume words that trigger the strength rule only when no cardio verb is present
pub const STRENGTH_VOLUME_WORDS: &[&str] = &["weights", "sets", "reps"];

/// Exercise name used when no named lift is found
pub const GENERIC_STRENGTH_EXERCISE: &str = "strength training";

/// Mood trigger words
pub const FEELING_WORDS: &[&str] = &["feeling", "feel"];
