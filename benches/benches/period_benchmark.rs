//! Range parsing and arithmetic benchmarks.
//!
//! Run with: `cargo bench --package horizon-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use horizon_bench::{INPUTS, chrono_baseline};
use horizon_period::{FixedClock, PeriodParser, TimePeriod};
use std::hint::black_box;

fn parse_benchmark(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let parser = PeriodParser::with_clock(FixedClock::new(now));

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));

    for input in INPUTS {
        group.bench_with_input(
            BenchmarkId::new("horizon", input.name),
            input.literal,
            |b, literal| b.iter(|| parser.parse(black_box(literal))),
        );

        // chrono's strftime parser as a baseline (closed ranges only)
        if !input.literal.ends_with(':') {
            group.bench_with_input(
                BenchmarkId::new("chrono", input.name),
                input.literal,
                |b, literal| b.iter(|| chrono_baseline(black_box(literal))),
            );
        }
    }

    group.finish();
}

fn arithmetic_benchmark(c: &mut Criterion) {
    let period = TimePeriod::parse("01/20/2009T12:00:00:01/20/2009T12:05:00")
        .expect("valid benchmark range");
    let previous = period.advance(-2);

    let mut group = c.benchmark_group("arithmetic");
    group.bench_function("length", |b| b.iter(|| black_box(&period).length()));
    group.bench_function("since", |b| {
        b.iter(|| black_box(&period).since(black_box(&previous)))
    });
    group.bench_function("advance", |b| {
        b.iter(|| black_box(&period).advance(black_box(12)))
    });
    group.bench_function("successors/100", |b| {
        b.iter(|| black_box(&period).successors().take(100).count())
    });
    group.bench_function("display", |b| b.iter(|| black_box(&period).to_string()));
    group.finish();
}

criterion_group!(benches, parse_benchmark, arithmetic_benchmark);
criterion_main!(benches);
