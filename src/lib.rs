// ABOUTME: Main library entry point for the coachlog free-text activity parser
// ABOUTME: Turns short fitness utterances into typed, scored, ranked activity records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachlog
//!
//! Classifies short natural-language fitness log entries ("ran 5k in 25
//! minutes", "weight 175 lbs", "oatmeal for breakfast, 16 oz water") into
//! typed activity records with a confidence score.
//!
//! ## Example
//!
//! ```rust
//! use coachlog::{ActivityParser, ActivityKind, ParseRequest};
//!
//! let parser = ActivityParser::default();
//! let outcome = parser.parse(&ParseRequest::new("weight 175, ran 5k"));
//! assert_eq!(outcome.kinds(), vec![ActivityKind::Weight, ActivityKind::Cardio]);
//! ```
//!
//! The parser is a pure function of its input: no I/O, no shared mutable
//! state, and no failure modes. Request validation and the persistence
//! threshold live in [`validation`] for the layer that calls it.

/// Environment-based configuration
pub mod config;

/// Structured logging setup for binaries
pub mod logging;

/// Segmenter, clause cascade and aggregator
pub mod parser;

/// Caller-side request validation and persistence policy
pub mod validation;

pub use coachlog_core::errors::{AppError, AppResult, ErrorCode};
pub use coachlog_core::{constants, errors, models};
pub use coachlog_core::models::{
    ActivityFields, ActivityKind, HintResolution, ParseOutcome, ParseRequest, ParsedActivity,
};
pub use config::ParserConfig;
pub use parser::ActivityParser;
pub use validation::{validate_request, PersistencePolicy};

/// Parse `text` with the default configuration
#[must_use]
pub fn parse(text: &str) -> ParseOutcome {
    ActivityParser::default().parse(&ParseRequest::new(text))
}
