// ABOUTME: ActivityParser - segments input, runs the cascade per clause and assembles the outcome
// ABOUTME: Applies the occurred-at policy (default now, clamp future) and the type-hint policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use coachlog_core::models::{HintResolution, ParseOutcome, ParseRequest, ParsedActivity};
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::rules::classify_clause;
use super::segmenter::segment;
use crate::config::ParserConfig;

/// Free-text activity parser.
///
/// Stateless apart from its configuration; a single instance can be shared
/// across threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct ActivityParser {
    config: ParserConfig,
}

impl ActivityParser {
    /// Create a parser with the given configuration
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Configuration this parser was built with
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a request, evaluating timestamps against the current time
    #[must_use]
    pub fn parse(&self, request: &ParseRequest) -> ParseOutcome {
        self.parse_at(request, Utc::now())
    }

    /// Parse a request, evaluating timestamps against `now`
    #[must_use]
    #[instrument(skip_all, fields(text_len = request.text.len(), hint = ?request.type_hint))]
    pub fn parse_at(&self, request: &ParseRequest, now: DateTime<Utc>) -> ParseOutcome {
        let clauses = if self.config.segment_clauses {
            segment(&request.text)
        } else {
            vec![request.text.trim()]
        };

        let activities: Vec<ParsedActivity> = clauses
            .into_iter()
            .enumerate()
            .map(|(rank, clause)| {
                let classification = classify_clause(clause);
                debug!(
                    rank,
                    rule = classification.rule,
                    kind = %classification.kind(),
                    confidence = classification.confidence,
                    "Classified clause"
                );
                ParsedActivity::new(
                    classification.fields,
                    classification.confidence,
                    clause,
                    rank,
                )
            })
            .collect();

        let type_hint = request.type_hint.map(|requested| HintResolution {
            requested,
            honored: activities.iter().any(|a| a.kind() == requested),
        });
        if let Some(resolution) = type_hint.filter(|r| !r.honored) {
            debug!(
                hint = %resolution.requested,
                "Type hint incompatible with text, keeping classifier result"
            );
        }

        ParseOutcome::new(
            activities,
            resolve_occurred_at(request.occurred_at, now),
            type_hint,
        )
    }

    /// Parse many requests in parallel. Output order matches input order and
    /// every request is evaluated against the same clock reading.
    #[must_use]
    pub fn parse_batch(&self, requests: &[ParseRequest]) -> Vec<ParseOutcome> {
        let now = Utc::now();
        requests
            .par_iter()
            .map(|request| self.parse_at(request, now))
            .collect()
    }
}

/// Resolve the caller's timestamp: absent means `now`, and anything later
/// than `now` is clamped to `now`. Past timestamps pass through.
#[must_use]
pub fn resolve_occurred_at(requested: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match requested {
        Some(ts) if ts > now => {
            debug!(requested = %ts, now = %now, "Clamping future timestamp to now");
            now
        }
        Some(ts) => ts,
        None => now,
    }
}
