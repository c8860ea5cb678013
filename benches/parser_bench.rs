// ABOUTME: Criterion benchmarks for the free-text activity parser
// ABOUTME: Measures segmentation, single-clause classification and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the activity parser.
//!
//! Covers the three stages separately (segment, classify, aggregate) and the
//! rayon-backed batch path at several sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use coachlog::parser::{classify_clause, segment};
use coachlog::{ActivityParser, ParseRequest};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SAMPLE_ENTRIES: [&str; 8] = [
    "weight 175 lbs",
    "ran 5k in 25 minutes",
    "oatmeal and banana for breakfast, 16 oz water",
    "slept 7.5 hours; energy 6",
    "bench press 3x5 at 185 lbs",
    "feeling great today",
    "walked 2 miles and cycled 45 min",
    "purple elephants dance",
];

fn generate_requests(count: usize) -> Vec<ParseRequest> {
    SAMPLE_ENTRIES
        .iter()
        .cycle()
        .take(count)
        .map(|text| ParseRequest::new(*text))
        .collect()
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenter");

    group.bench_function("single_clause", |b| {
        b.iter(|| segment(black_box("weight 175 lbs")));
    });
    group.bench_function("four_clauses", |b| {
        b.iter(|| {
            segment(black_box(
                "weight 175, ran 5k; ate chicken salad and 16 oz water",
            ))
        });
    });

    group.finish();
}

/// Each sample hits a different depth of the rule cascade
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");

    for text in SAMPLE_ENTRIES {
        group.bench_with_input(BenchmarkId::new("classify_clause", text), text, |b, text| {
            b.iter(|| classify_clause(black_box(text)));
        });
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_batch_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let parser = ActivityParser::default();

    for count in [10_usize, 100, 1000] {
        let requests = generate_requests(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &requests,
            |b, requests| {
                b.iter(|| {
                    requests
                        .iter()
                        .map(|request| parser.parse(black_box(request)))
                        .collect::<Vec<_>>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parse_batch", count),
            &requests,
            |b, requests| {
                b.iter(|| parser.parse_batch(black_box(requests)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_classification,
    bench_batch_parsing,
);
criterion_main!(benches);
