// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scadforge::{format_number, render_to_string, Cylinder, Document, Recorder, RenderConfig, Rotate};

fn honeycomb(s: &mut Recorder, rows: usize, cols: usize) {
    s.use_file("lib/hex.scad");
    s.difference(|s| {
        s.cube([cols as f64 * 10.0, rows as f64 * 9.0, 3.0]);
        for row in 0..rows {
            for col in 0..cols {
                let offset = if row % 2 == 0 { 0.0 } else { 5.0 };
                s.translate([col as f64 * 10.0 + offset, row as f64 * 8.66, -1.0], |s| {
                    s.rotate(Rotate::default().z(30.0), |s| {
                        s.cylinder(Cylinder::new(5.0, 4.5).segments(6))
                    })
                });
            }
        }
    });
}

fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    for value in [0.0, 1.0, -123.456, std::f64::consts::PI] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, v| {
            b.iter(|| format_number(black_box(*v)).unwrap())
        });
    }

    group.finish();
}

fn bench_honeycomb(c: &mut Criterion) {
    let mut group = c.benchmark_group("honeycomb");
    let config = RenderConfig::default();

    for size in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("record", size), &size, |b, &n| {
            b.iter(|| Document::record(config.clone(), |s| honeycomb(s, n, n)).unwrap())
        });

        let document = Document::record(config.clone(), |s| honeycomb(s, size, size)).unwrap();
        group.bench_with_input(BenchmarkId::new("emit", size), &document, |b, doc| {
            b.iter(|| doc.render().unwrap())
        });

        group.bench_with_input(BenchmarkId::new("record_and_emit", size), &size, |b, &n| {
            b.iter(|| render_to_string(&config, |s| honeycomb(s, n, n)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format_number, bench_honeycomb);
criterion_main!(benches);
