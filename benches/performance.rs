// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for Harmonica
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Search strategies against brute force over the same criteria
//! - Scale function evaluation and inversion
//! - Subshape matching

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harmonica::find::{FindPitchSets, SearchStrategy};
use harmonica::music::{Note, PitchSet, PitchSetShape, ScaleFunc, ScaleType};

/// Shape search by transposition scan vs brute force
fn bench_shape_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_search");
    let shape = PitchSetShape::new(vec![4, 3]).unwrap();

    for width in [8i64, 12, 16].iter() {
        let find = FindPitchSets::new(60, 60 + width).unwrap().has_shape(shape.clone());

        group.bench_with_input(BenchmarkId::new("transpositions", width), &find, |b, find| {
            b.iter(|| black_box(find.collect_with(SearchStrategy::Transpositions).unwrap().len()))
        });

        group.bench_with_input(BenchmarkId::new("brute_force", width), &find, |b, find| {
            b.iter(|| black_box(find.collect_with(SearchStrategy::BruteForce).unwrap().len()))
        });
    }

    group.finish();
}

/// Pitch class restricted search vs brute force
fn bench_pcset_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("pcset_search");
    let pcset = ScaleType::MajorPentatonic.pcset(Note::C);

    for width in [8i64, 12, 16].iter() {
        let find = FindPitchSets::new(60, 60 + width)
            .unwrap()
            .in_pcset(pcset.clone())
            .max_cardinality(4);

        group.bench_with_input(BenchmarkId::new("restricted", width), &find, |b, find| {
            b.iter(|| black_box(find.collect_with(SearchStrategy::PcsetRestricted).unwrap().len()))
        });

        group.bench_with_input(BenchmarkId::new("brute_force", width), &find, |b, find| {
            b.iter(|| black_box(find.collect_with(SearchStrategy::BruteForce).unwrap().len()))
        });
    }

    group.finish();
}

/// Scale function evaluation and index lookup over four octaves
fn bench_scale_func(c: &mut Criterion) {
    let scale = ScaleFunc::new(vec![2, 4, 5, 7, 9, 11, 12], 0).unwrap();

    c.bench_function("scale_func_eval", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for n in -14..14 {
                total += scale.eval(black_box(n));
            }
            black_box(total)
        })
    });

    c.bench_function("scale_func_index", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for pitch in 36..84 {
                if scale.index(black_box(pitch)).is_ok() {
                    found += 1;
                }
            }
            black_box(found)
        })
    });

    c.bench_function("scale_func_in_range", |b| {
        b.iter(|| black_box(scale.in_range(black_box(21), black_box(108)).len()))
    });
}

/// Subshape matching against a wide voicing
fn bench_subshape(c: &mut Criterion) {
    let shape = PitchSetShape::new(vec![4, 3, 4]).unwrap();
    let voicing = PitchSet::new(vec![36, 43, 48, 52, 55, 59, 62, 64, 67, 71, 74]).unwrap();

    c.bench_function("is_subshape_of", |b| {
        b.iter(|| black_box(shape.is_subshape_of(black_box(&voicing))))
    });
}

criterion_group!(
    benches,
    bench_shape_search,
    bench_pcset_search,
    bench_scale_func,
    bench_subshape,
);

criterion_main!(benches);
