// ABOUTME: Free-text activity parser: segmenter, rule cascade, unit helpers and aggregator
// ABOUTME: Single consolidated classifier consumed by every caller through ActivityParser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Parser
//!
//! Pipeline: segment the text into clauses, classify each clause with the
//! ordered rule cascade, then assemble a ranked `ParseOutcome`. The whole
//! pipeline is a pure, synchronous function of its input and never fails.

/// Outcome assembly and timestamp policy
pub mod aggregator;
/// Compiled regular expressions
mod patterns;
/// Ordered clause classification cascade
pub mod rules;
/// Clause splitting
pub mod segmenter;
/// Distance and duration extraction
pub mod units;

pub use aggregator::{resolve_occurred_at, ActivityParser};
pub use rules::{classify_clause, Classification};
pub use segmenter::segment;
