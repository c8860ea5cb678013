// ABOUTME: Default limits applied by caller-side validation
// ABOUTME: Input length ceilings and environment variable names for parser configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum number of characters accepted by request validation
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2000;

/// Environment variable toggling multi-activity segmentation
pub const ENV_SEGMENT_CLAUSES: &str = "COACHLOG_SEGMENT_CLAUSES";

/// Environment variable overriding the input length ceiling
pub const ENV_MAX_INPUT_CHARS: &str = "COACHLOG_MAX_INPUT_CHARS";

/// Environment variable overriding the persistence confidence threshold
pub const ENV_PERSIST_MIN_CONFIDENCE: &str = "COACHLOG_PERSIST_MIN_CONFIDENCE";
