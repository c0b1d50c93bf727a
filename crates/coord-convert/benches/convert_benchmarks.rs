//! Benchmarks for the coordinate conversion crate.
//!
//! Run with: cargo bench --package coord-convert
//! Or: cargo bench --package coord-convert --bench convert_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

use coord_convert::{convert, format_bng, format_mgrs, parse, GeoCoord};

/// Generate random in-bounds positions for batch conversion benchmarks.
fn random_points(count: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (rng.gen_range(-80.0..84.0), rng.gen_range(-180.0..180.0)))
        .collect()
}

// =============================================================================
// RECOGNITION BENCHMARKS
// =============================================================================

fn bench_recognition(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognition");

    group.bench_function("parse_dd", |b| {
        b.iter(|| parse(black_box("51.5074, -0.1278")))
    });

    group.bench_function("parse_ddm", |b| {
        b.iter(|| parse(black_box("51° 30.444' N, 000° 7.668' W")))
    });

    group.bench_function("parse_dms", |b| {
        b.iter(|| parse(black_box("51° 30' 26.6\" N, 000° 07' 40.1\" W")))
    });

    group.bench_function("parse_bng", |b| {
        b.iter(|| parse(black_box("TQ 30042 80419")))
    });

    group.bench_function("parse_mgrs", |b| {
        b.iter(|| parse(black_box("30U XC 99312 09617")))
    });

    // Unrecognizable input walks the whole parser chain.
    group.bench_function("parse_miss", |b| {
        b.iter(|| parse(black_box("not a coordinate")))
    });

    // Mixed-notation batch (typical interactive lookup traffic)
    let inputs = [
        "51.5074, -0.1278",
        "TQ 30042 80419",
        "30U XC 99312 09617",
        "50° 39.887' N, 3° 26.317' W",
        "50° 39' 53.2\" N, 3° 26' 19.0\" W",
    ];
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("parse_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parse(black_box(input));
            }
        })
    });

    group.finish();
}

// =============================================================================
// FORMATTING BENCHMARKS
// =============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let london = GeoCoord {
        latitude: 51.5074,
        longitude: -0.1278,
    };

    group.bench_function("format_bng", |b| {
        b.iter(|| format_bng(black_box(&london)))
    });

    group.bench_function("format_mgrs", |b| {
        b.iter(|| format_mgrs(black_box(&london)))
    });

    group.bench_function("convert_all_notations", |b| {
        b.iter(|| convert(black_box(51.5074), black_box(-0.1278)))
    });

    let points = random_points(100);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("convert_batch_100", |b| {
        b.iter(|| {
            for (lat, lon) in &points {
                let _ = convert(black_box(*lat), black_box(*lon));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_recognition, bench_formatting);
criterion_main!(benches);
