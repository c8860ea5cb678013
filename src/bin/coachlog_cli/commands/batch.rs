// ABOUTME: Batch classification command for the coachlog CLI
// ABOUTME: Reads one entry per line, classifies valid entries in parallel and prints JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use coachlog::errors::ErrorResponse;
use coachlog::{validate_request, ActivityParser, AppError, AppResult, ParseRequest};
use serde_json::json;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

/// Classify every non-blank line of `input` (stdin when `None`)
pub fn run(parser: &ActivityParser, input: Option<&Path>) -> Result<()> {
    let lines = read_lines(input)?;

    let mut requests = Vec::new();
    let mut request_lines = Vec::new();
    let mut rejected = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let request = ParseRequest::new(line.as_str());
        match validate_request(&request, parser.config()) {
            Ok(()) => {
                requests.push(request);
                request_lines.push(index + 1);
            }
            Err(e) => {
                warn!(line = index + 1, "Skipping invalid entry: {e}");
                rejected.push((index + 1, e));
            }
        }
    }

    let outcomes = parser.parse_batch(&requests);
    info!(
        parsed = outcomes.len(),
        rejected = rejected.len(),
        "Batch classification complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (line, outcome) in request_lines.into_iter().zip(outcomes) {
        let record = json!({ "line": line, "outcome": outcome });
        writeln!(out, "{record}").map_err(io_error)?;
    }
    for (line, error) in rejected {
        let record = json!({ "line": line, "error": ErrorResponse::from(error) });
        writeln!(out, "{record}").map_err(io_error)?;
    }
    Ok(())
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    let lines: io::Result<Vec<String>> = match input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::invalid_input(format!("cannot open {}: {e}", path.display()))
                    .with_source(e)
            })?;
            BufReader::new(file).lines().collect()
        }
        None => io::stdin().lock().lines().collect(),
    };
    lines.map_err(io_error)
}

fn io_error(e: io::Error) -> AppError {
    AppError::internal(format!("I/O error: {e}")).with_source(e)
}
