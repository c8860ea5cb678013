// ABOUTME: Compiled regular expressions used by the segmenter and the clause cascade
// ABOUTME: Each pattern compiles once per process; a pattern that fails to compile never matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pattern accessors return `Option<&'static Regex>`. A `None` means the
//! pattern failed to compile, which is logged once; callers treat it as "no
//! match" so the classifier stays total.

use std::sync::OnceLock;

use coachlog_core::constants::vocabulary::LIFT_NAMES;
use regex::Regex;
use tracing::warn;

/// Decimal number capture shared by quantity patterns
const NUMBER: &str = r"(\d+(?:\.\d+)?)";

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern.name = %name, error = %e, "Failed to compile classifier pattern");
            None
        }
    }
}

macro_rules! pattern {
    ($fn_name:ident, $name:literal, $pattern:expr) => {
        pub(crate) fn $fn_name() -> Option<&'static Regex> {
            static RE: OnceLock<Option<Regex>> = OnceLock::new();
            RE.get_or_init(|| compile($name, &$pattern)).as_ref()
        }
    };
}

// Clause delimiters: comma, semicolon, or the standalone word "and"
pattern!(delimiter, "delimiter", r"(?i)\s*(?:[,;]|\band\b)\s*");

// Whole clause: optional "weight", a number, optional weight unit
pattern!(
    weight,
    "weight",
    format!(r"(?i)^(?:weight\s*:?\s*)?{NUMBER}\s*(lbs?|pounds?|kg|kilos?)?$")
);

pattern!(
    energy,
    "energy",
    r"(?i)\benergy\b(?:\s+level)?\s*(?::|=|is\b|at\b)?\s*(\d+)\b(?:\s*/\s*10)?"
);

pattern!(
    sleep,
    "sleep",
    format!(r"(?i)\b(?:slept|sleep)\b(?:\s+for)?\s*:?\s*{NUMBER}(?:\s*(?:hours?|hrs?)\b)?")
);

pattern!(
    water_quantity,
    "water_quantity",
    format!(
        r"(?i)\b(?:(?:drank|had|drink)\s+)?{NUMBER}\s*(oz|ml|cups?|liters?|l)\b(?:\s+(?:of\s+)?water)?"
    )
);

pattern!(water_word, "water_word", r"(?i)\bwater\b");

pattern!(
    distance,
    "distance",
    format!(r"(?i)\b{NUMBER}\s*(km|k|miles?|mi|meters?|m)\b")
);

pattern!(
    duration,
    "duration",
    format!(r"(?i)\b{NUMBER}\s*(minutes?|mins?|hours?|hrs?)\b")
);

pattern!(
    sets_by_reps,
    "sets_by_reps",
    r"(?i)\b(\d+)\s*[x×]\s*(\d+)\b"
);

pattern!(sets, "sets", r"(?i)\b(\d+)\s*sets?\b");

pattern!(reps, "reps", r"(?i)\b(\d+)\s*reps?\b");

pattern!(
    load,
    "load",
    format!(r"(?i)\b{NUMBER}\s*(lbs?|pounds?|kg|kilos?)\b")
);

/// Named lift patterns in priority order, paired with their canonical name
pub(crate) fn lifts() -> &'static [(Regex, &'static str)] {
    static LIFTS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    LIFTS.get_or_init(|| {
        LIFT_NAMES
            .iter()
            .filter_map(|(pattern, name)| {
                compile(name, &format!(r"(?i)\b(?:{pattern})\b")).map(|re| (re, *name))
            })
            .collect()
    })
}
