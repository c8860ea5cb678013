// ABOUTME: Parse request and result models exchanged with the activity parser
// ABOUTME: ParseRequest in, ParseOutcome of ranked ParsedActivity values out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::ActivityFields;
use super::kind::ActivityKind;
use crate::constants::confidence::UNKNOWN_CEILING;

/// Raw user utterance plus optional caller context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    /// Untrusted text as typed by the user
    pub text: String,
    /// When the activity happened; defaults to now, clamped to now if in the future
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Caller-asserted kind, honored only when the text agrees with it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_hint: Option<ActivityKind>,
}

impl ParseRequest {
    /// Create a request for the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            occurred_at: None,
            type_hint: None,
        }
    }

    /// Set the caller-supplied timestamp
    #[must_use]
    pub fn with_occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(occurred_at);
        self
    }

    /// Set the caller-asserted kind
    #[must_use]
    pub fn with_type_hint(mut self, kind: ActivityKind) -> Self {
        self.type_hint = Some(kind);
        self
    }
}

/// One classified clause. Immutable once built.
///
/// Deserialization goes through [`ParsedActivity::new`], so stored results
/// are clamped exactly like freshly parsed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ParsedActivityRecord")]
pub struct ParsedActivity {
    #[serde(flatten)]
    fields: ActivityFields,
    confidence: f64,
    source_text: String,
    rank: usize,
}

impl ParsedActivity {
    /// Build a parsed activity.
    ///
    /// Confidence is clamped into `[0, 1]`, and into `[0, 0.2]` for unknown
    /// clauses, so no constructed value can break the scoring invariants.
    #[must_use]
    pub fn new(
        fields: ActivityFields,
        confidence: f64,
        source_text: impl Into<String>,
        rank: usize,
    ) -> Self {
        let ceiling = if fields.kind() == ActivityKind::Unknown {
            UNKNOWN_CEILING
        } else {
            1.0
        };
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, ceiling)
        };
        Self {
            fields,
            confidence,
            source_text: source_text.into(),
            rank,
        }
    }

    /// Activity category
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.fields.kind()
    }

    /// Kind-specific payload
    #[must_use]
    pub const fn fields(&self) -> &ActivityFields {
        &self.fields
    }

    /// Heuristic specificity score in `[0, 1]`
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Exact clause this result was derived from
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Zero-based position among sibling results
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }
}

/// Wire form of `ParsedActivity` before the confidence clamp is applied
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedActivityRecord {
    #[serde(flatten)]
    fields: ActivityFields,
    confidence: f64,
    source_text: String,
    rank: usize,
}

impl From<ParsedActivityRecord> for ParsedActivity {
    fn from(record: ParsedActivityRecord) -> Self {
        Self::new(
            record.fields,
            record.confidence,
            record.source_text,
            record.rank,
        )
    }
}

/// Whether a caller's type hint agreed with the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResolution {
    /// Kind the caller asserted
    pub requested: ActivityKind,
    /// True when at least one clause classified as the requested kind
    pub honored: bool,
}

/// Result of one parse call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    activities: Vec<ParsedActivity>,
    occurred_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    type_hint: Option<HintResolution>,
}

impl ParseOutcome {
    /// Assemble an outcome from already-ranked activities
    #[must_use]
    pub fn new(
        activities: Vec<ParsedActivity>,
        occurred_at: DateTime<Utc>,
        type_hint: Option<HintResolution>,
    ) -> Self {
        Self {
            activities,
            occurred_at,
            type_hint,
        }
    }

    /// Activities in rank order
    #[must_use]
    pub fn activities(&self) -> &[ParsedActivity] {
        &self.activities
    }

    /// Consume the outcome, yielding its activities
    #[must_use]
    pub fn into_activities(self) -> Vec<ParsedActivity> {
        self.activities
    }

    /// First-ranked activity
    #[must_use]
    pub fn primary(&self) -> Option<&ParsedActivity> {
        self.activities.first()
    }

    /// Kinds of all activities, in rank order
    #[must_use]
    pub fn kinds(&self) -> Vec<ActivityKind> {
        self.activities.iter().map(ParsedActivity::kind).collect()
    }

    /// Resolved timestamp (never in the future relative to evaluation time)
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// How the caller's type hint was treated, if one was supplied
    #[must_use]
    pub const fn type_hint(&self) -> Option<HintResolution> {
        self.type_hint
    }
}
