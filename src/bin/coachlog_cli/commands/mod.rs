// ABOUTME: Re-exports command modules for the coachlog CLI
// ABOUTME: Provides single-entry parse and batch classification commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod batch;
pub mod parse;
