//! Benchmarks for the substring-search hot path
//!
//! The scan kernels are linear; these benchmarks track the constant factor
//! across realistic sequence sizes, with and without matches present.
//!
//! Run with: cargo bench --bench search_operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqfind::operations::{has_occurrence, occurrence_ranges};
use seqfind::SequenceStore;
use std::io::Cursor;

/// Periodic ACGT test sequence
fn generate_sequence(len: usize) -> String {
    (0..len).map(|i| ['A', 'C', 'G', 'T'][i % 4]).collect()
}

fn bench_has_occurrence(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_occurrence");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let sequence = generate_sequence(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        // "ACGTACGT" hits immediately in the periodic sequence.
        group.bench_with_input(BenchmarkId::new("hit", size), size, |b, _| {
            b.iter(|| has_occurrence(black_box(&sequence), black_box("ACGTACGT")));
        });

        // "AAAA" never occurs, forcing a full scan.
        group.bench_with_input(BenchmarkId::new("miss", size), size, |b, _| {
            b.iter(|| has_occurrence(black_box(&sequence), black_box("AAAA")));
        });
    }

    group.finish();
}

fn bench_occurrence_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("occurrence_ranges");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let sequence = generate_sequence(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        // Dense: one match per period.
        group.bench_with_input(BenchmarkId::new("dense", size), size, |b, _| {
            b.iter(|| occurrence_ranges(black_box(&sequence), black_box("ACGT")));
        });

        // Sparse: no matches, pure scan cost.
        group.bench_with_input(BenchmarkId::new("sparse", size), size, |b, _| {
            b.iter(|| occurrence_ranges(black_box(&sequence), black_box("AAAA")));
        });
    }

    group.finish();
}

fn bench_store_search(c: &mut Criterion) {
    // 100 records of 1 kb each, as a small multi-record library.
    let mut fasta = String::new();
    for i in 0..100 {
        fasta.push_str(&format!(">record_{}\n{}\n", i, generate_sequence(1_000)));
    }
    let store = SequenceStore::from_reader(Cursor::new(fasta.into_bytes())).unwrap();

    c.bench_function("store_search_100x1kb", |b| {
        b.iter(|| store.search(black_box("ACGTACGT")).unwrap());
    });

    let ids = store.search("ACGTACGT").unwrap();
    c.bench_function("store_find_occurrences_100x1kb", |b| {
        b.iter(|| store.find_occurrences(black_box(&ids), black_box("ACGTACGT")).unwrap());
    });
}

criterion_group!(
    benches,
    bench_has_occurrence,
    bench_occurrence_ranges,
    bench_store_search
);
criterion_main!(benches);
