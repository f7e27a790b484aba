//! Benchmarks for building, enriching, and cloning score data over sampled
//! protein profiles of typical lengths.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use scoredata::prelude::*;

const LENGTHS: [usize; 3] = [100, 400, 1600];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in LENGTHS {
        let profile = Profile::sample(Alphabet::AMINO, len, 17).unwrap();

        group.bench_with_input(BenchmarkId::new("quantized", len), &profile, |b, p| {
            b.iter(|| ScoreData::quantized(black_box(p)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("float", len), &profile, |b, p| {
            b.iter(|| ScoreData::float(black_box(p), black_box(p)).unwrap());
        });
    }
    group.finish();
}

fn bench_enrich(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich");
    for len in LENGTHS {
        let profile = Profile::sample(Alphabet::AMINO, len, 17).unwrap();
        let template = ScoreData::quantized(&profile).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(len), &profile, |b, p| {
            b.iter(|| template.try_clone().unwrap().enrich(black_box(p)).unwrap());
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_clone");
    for len in LENGTHS {
        let profile = Profile::sample(Alphabet::AMINO, len, 17).unwrap();
        let enriched = ScoreData::new(&profile, Some(&profile)).unwrap().enrich(&profile).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(len), &enriched, |b, data| {
            b.iter(|| black_box(data).try_clone().unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_build, bench_enrich, bench_clone
);
criterion_main!(benches);
