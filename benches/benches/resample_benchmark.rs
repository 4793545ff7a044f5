//! Decode and resample benchmarks over synthetic day files.
//!
//! Run with: `cargo bench --package zticks-bench`

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use zticks_bench::{BenchCache, compressed_day};
use zticks_lib::{
    BarInterval, HistoryRequest, HistoryWindow, Resampler, decode_ticks, decompress_zticks,
};

const TICKS_PER_DAY: usize = 100_000;

fn decode_benchmark(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let compressed = compressed_day(day, TICKS_PER_DAY).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(TICKS_PER_DAY as u64));

    group.bench_function("decompress", |b| {
        b.iter(|| decompress_zticks(black_box(&compressed)).unwrap());
    });

    let data = decompress_zticks(&compressed).unwrap();
    group.bench_function("parse_zero_fill", |b| {
        b.iter(|| decode_ticks(black_box(&data)));
    });

    group.finish();
}

fn resample_benchmark(c: &mut Criterion) {
    let last_day = NaiveDate::from_ymd_opt(2024, 1, 19).unwrap();
    let cache = BenchCache::new("EURUSD", last_day, 7, TICKS_PER_DAY).unwrap();
    let store = cache.store();
    let window = HistoryWindow::new(
        Utc.with_ymd_and_hms(2024, 1, 13, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 19, 23, 59, 59).unwrap(),
    )
    .unwrap();

    let mut group = c.benchmark_group("resample");
    group.sample_size(10);
    group.throughput(Throughput::Elements(5 * TICKS_PER_DAY as u64));

    for interval in [BarInterval::Tick, BarInterval::from_minutes(1), BarInterval::from_minutes(60)] {
        let request = HistoryRequest::new("EURUSD", window, interval, usize::MAX);
        group.bench_with_input(BenchmarkId::from_parameter(interval), &request, |b, request| {
            b.iter(|| {
                let mut resampler = Resampler::default();
                resampler.resample(&store, black_box(request), 1e-5)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark, resample_benchmark);
criterion_main!(benches);
