// ABOUTME: Core types and constants for the coachlog free-text activity parser
// ABOUTME: Foundation crate with activity models, error handling, and classifier constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachlog Core
//!
//! Foundation crate providing the shared types and constants for the coachlog
//! activity parser. The parser engine, configuration and CLI live in the root
//! `coachlog` crate; everything a caller needs to hold or serialize a parse
//! result lives here so persistence and coaching layers can depend on it
//! without pulling in the regex engine.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: confidence scores and the fixed keyword vocabularies
//! - **models**: `ActivityKind`, per-kind field structs, `ParsedActivity`,
//!   `ParseRequest` and `ParseOutcome`

/// Unified error handling with standard error codes
pub mod errors;

/// Classifier constants organized by domain
pub mod constants;

/// Activity models produced and consumed by the parser
pub mod models;
