// ABOUTME: Single-entry parse command for the coachlog CLI
// ABOUTME: Validates the entry, classifies it and prints the outcome as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use coachlog::{
    validate_request, ActivityKind, ActivityParser, AppResult, ParseRequest, PersistencePolicy,
};
use tracing::info;

type Result<T> = AppResult<T>;

/// Classify one entry and print the outcome
pub fn run(
    parser: &ActivityParser,
    text: &str,
    hint: Option<ActivityKind>,
    occurred_at: Option<DateTime<Utc>>,
    pretty: bool,
) -> Result<()> {
    let mut request = ParseRequest::new(text);
    request.type_hint = hint;
    request.occurred_at = occurred_at;

    validate_request(&request, parser.config())?;
    let outcome = parser.parse(&request);

    let policy = PersistencePolicy::from_config(parser.config());
    info!(
        activities = outcome.activities().len(),
        persistable = policy.persistable(&outcome).len(),
        "Parsed entry"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");
    Ok(())
}
