// ABOUTME: Parser configuration loaded from environment variables
// ABOUTME: Segmentation toggle, caller-side input ceiling and persistence confidence threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use coachlog_core::constants::confidence::DEFAULT_PERSIST_THRESHOLD;
use coachlog_core::constants::limits::{
    DEFAULT_MAX_INPUT_CHARS, ENV_MAX_INPUT_CHARS, ENV_PERSIST_MIN_CONFIDENCE, ENV_SEGMENT_CLAUSES,
};
use coachlog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Activity parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Split multi-activity input on commas, semicolons and "and"
    pub segment_clauses: bool,
    /// Longest text request validation accepts, in characters
    pub max_input_chars: usize,
    /// Minimum confidence for a result to be persisted
    pub persist_min_confidence: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            segment_clauses: true,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            persist_min_confidence: DEFAULT_PERSIST_THRESHOLD,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment, falling back to defaults for
    /// unset variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed, or
    /// if the confidence threshold lies outside `[0, 1]`
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            segment_clauses: env_parse_or(ENV_SEGMENT_CLAUSES, defaults.segment_clauses)?,
            max_input_chars: env_parse_or(ENV_MAX_INPUT_CHARS, defaults.max_input_chars)?,
            persist_min_confidence: env_parse_or(
                ENV_PERSIST_MIN_CONFIDENCE,
                defaults.persist_min_confidence,
            )?,
        };
        config.validate()?;
        debug!(?config, "Parser configuration loaded");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the confidence threshold lies outside
    /// `[0, 1]` or the input ceiling is zero
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.persist_min_confidence) {
            return Err(AppError::config_invalid(format!(
                "{ENV_PERSIST_MIN_CONFIDENCE} must be within [0, 1], got {}",
                self.persist_min_confidence
            )));
        }
        if self.max_input_chars == 0 {
            return Err(AppError::config_invalid(format!(
                "{ENV_MAX_INPUT_CHARS} must be greater than zero"
            )));
        }
        Ok(())
    }
}

fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| {
            AppError::config_invalid(format!("{key}='{raw}' is invalid: {e}"))
        }),
        Err(_) => Ok(default),
    }
}
