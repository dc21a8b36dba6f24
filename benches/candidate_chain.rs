use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lcs_chain::{lcs, ses};

/// A mostly-matching pair of sequences with a handful of edits scattered
/// through it, similar in shape to a line-diff of two revisions of the same
/// file.
fn similar_sequences(len: usize) -> (Vec<u32>, Vec<u32>) {
    let a: Vec<u32> = (0..len as u32).collect();
    let mut b = a.clone();
    for i in (0..b.len()).step_by(17) {
        b[i] = b[i].wrapping_add(10_000);
    }
    (a, b)
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    for len in [128usize, 1024, 8192] {
        let (a, b) = similar_sequences(len);
        group.bench_with_input(BenchmarkId::new("similar", len), &len, |bencher, _| {
            bencher.iter(|| lcs(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_ses(c: &mut Criterion) {
    let mut group = c.benchmark_group("ses");
    for len in [128usize, 1024, 8192] {
        let (a, b) = similar_sequences(len);
        group.bench_with_input(BenchmarkId::new("similar", len), &len, |bencher, _| {
            bencher.iter(|| ses(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcs, bench_ses);
criterion_main!(benches);
