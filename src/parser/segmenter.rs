// ABOUTME: Splits raw activity text into independently classified clauses
// ABOUTME: Delimiters are comma, semicolon and the standalone word "and"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::patterns;

/// Split `text` into trimmed, non-empty clauses.
///
/// The result is never empty: when the text has no delimiter, or nothing but
/// delimiters, it is a single element equal to the trimmed input.
#[must_use]
pub fn segment(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let Some(delimiter) = patterns::delimiter() else {
        return vec![trimmed];
    };

    let clauses: Vec<&str> = delimiter
        .split(trimmed)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect();

    if clauses.is_empty() {
        vec![trimmed]
    } else {
        clauses
    }
}
