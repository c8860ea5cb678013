// ABOUTME: coachlog CLI - classify free-text fitness log entries from the command line
// ABOUTME: Single-entry parsing and parallel batch classification with JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify one entry
//! coachlog parse "weight 175, ran 5k in 25 minutes"
//!
//! # Assert a type and a timestamp
//! coachlog parse 175 --hint weight --occurred-at 2025-03-01T07:30:00Z --pretty
//!
//! # Classify a file of entries, one per line, in parallel
//! coachlog batch --input journal.txt
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use coachlog::logging::LoggingConfig;
use coachlog::{ActivityKind, ActivityParser, AppError, AppResult, ParserConfig};
use tracing::error;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "coachlog",
    about = "Classify free-text fitness log entries",
    long_about = "Turns short natural-language fitness entries into typed, scored activity records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a single entry and print the outcome as JSON
    Parse {
        /// Entry text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Caller-asserted activity type, honored only when the text agrees
        #[arg(long, value_parser = parse_kind)]
        hint: Option<ActivityKind>,

        /// When the activity happened (RFC 3339); future values are clamped to now
        #[arg(long, value_parser = parse_timestamp)]
        occurred_at: Option<DateTime<Utc>>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Classify one entry per line and print JSON lines
    Batch {
        /// Input file (defaults to stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
}

fn parse_kind(raw: &str) -> std::result::Result<ActivityKind, String> {
    raw.parse().map_err(|e: AppError| e.message)
}

fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{raw}': {e}"))
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let config = ParserConfig::from_env()?;
    let parser = ActivityParser::new(config);

    match cli.command {
        Command::Parse {
            text,
            hint,
            occurred_at,
            pretty,
        } => commands::parse::run(&parser, &text.join(" "), hint, occurred_at, pretty),
        Command::Batch { input } => commands::batch::run(&parser, input.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
