// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Confidence scores, keyword vocabularies and default limits for the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Confidence scores assigned by each cascade rule
pub mod confidence;
/// Fixed keyword vocabularies (meals, foods, moods, lifts)
pub mod vocabulary;
/// Default limits used by configuration and validation
pub mod limits;

pub use confidence::*;
