// ABOUTME: Configuration module for the coachlog parser
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Parser behavior and validation limits
pub mod parser;

pub use parser::ParserConfig;
