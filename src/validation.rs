// ABOUTME: Caller-side request validation and the persistence confidence policy
// ABOUTME: Rejects empty or oversized text before parsing; decides which results are worth storing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The parser accepts any string. These helpers belong to the layer that
//! calls it: an HTTP handler validates the request first (400 on failure)
//! and consults `PersistencePolicy` before writing anything to storage.

use coachlog_core::errors::{AppError, AppResult};
use coachlog_core::models::{ActivityKind, ParseOutcome, ParseRequest, ParsedActivity};

use crate::config::ParserConfig;

/// Validate a request before handing it to the parser
///
/// # Errors
///
/// Returns `MissingRequiredField` for empty or whitespace-only text and
/// `ValueOutOfRange` for text longer than `config.max_input_chars`
pub fn validate_request(request: &ParseRequest, config: &ParserConfig) -> AppResult<()> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::missing_field("text"));
    }

    let length = text.chars().count();
    if length > config.max_input_chars {
        return Err(AppError::out_of_range(format!(
            "Text is {length} characters, maximum is {}",
            config.max_input_chars
        ))
        .with_details(serde_json::json!({
            "field": "text",
            "length": length,
            "max": config.max_input_chars,
        })));
    }

    Ok(())
}

/// Decides which parsed activities a caller should persist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistencePolicy {
    min_confidence: f64,
}

impl PersistencePolicy {
    /// Policy with an explicit confidence threshold
    #[must_use]
    pub const fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Policy using the configured threshold
    #[must_use]
    pub const fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.persist_min_confidence)
    }

    /// Threshold in use
    #[must_use]
    pub const fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// True when the activity is classified and confident enough to store
    #[must_use]
    pub fn should_persist(&self, activity: &ParsedActivity) -> bool {
        activity.kind() != ActivityKind::Unknown && activity.confidence() >= self.min_confidence
    }

    /// Activities from `outcome` that pass the policy, in rank order
    #[must_use]
    pub fn persistable<'a>(&self, outcome: &'a ParseOutcome) -> Vec<&'a ParsedActivity> {
        outcome
            .activities()
            .iter()
            .filter(|activity| self.should_persist(activity))
            .collect()
    }
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}
