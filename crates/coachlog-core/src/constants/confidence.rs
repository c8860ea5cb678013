// ABOUTME: Confidence scores assigned by the activity classifier cascade
// ABOUTME: Ordered by pattern specificity so structured matches outrank keyword matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Confidence is a heuristic of how structurally specific the matched pattern
//! was. It is not a probability.
//!
//! Ordering: anchored or number-adjacent structure > unit plus keyword guard >
//! keyword-triggered extraction > keyword-only > fallback.

/// Anchored weight match, energy and sleep readings
pub const STRUCTURED_MATCH: f64 = 0.95;

/// Water intake: quantity with a volume unit guarded by the word "water"
pub const GUARDED_QUANTITY_MATCH: f64 = 0.9;

/// Nutrition, strength and cardio: keyword trigger with optional extraction
pub const KEYWORD_EXTRACTION: f64 = 0.85;

/// Mood: a feeling keyword alone
pub const KEYWORD_ONLY: f64 = 0.8;

/// Unmatched clause
pub const UNKNOWN: f64 = 0.1;

/// Upper bound any Unknown result may carry
pub const UNKNOWN_CEILING: f64 = 0.2;

/// Minimum confidence for a result to be persisted by default
pub const DEFAULT_PERSIST_THRESHOLD: f64 = 0.6;
