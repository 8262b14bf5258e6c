use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use traitcontainer::algorithm::{copy_range, lower_bound};
use traitcontainer::interface::{Sequence, SequenceMut};

fn create_shuffled_vec(len: u64) -> Vec<u64> {
    let mut random = rand::rngs::StdRng::seed_from_u64(0);
    let mut result: Vec<_> = (0..len).collect();
    result.shuffle(&mut random);
    result
}

fn bench_cursor_walk_10000(criterion: &mut Criterion) {
    let sequence = create_shuffled_vec(10_000);

    criterion.bench_function("cursor_walk_10000", |b| {
        b.iter(|| {
            let mut cursor = sequence.begin();
            let end = sequence.end();
            let mut sum = 0u64;
            while cursor != end {
                sum += *cursor.post_increment();
            }
            black_box(sum)
        })
    });
}

fn bench_slice_walk_10000(criterion: &mut Criterion) {
    let sequence = create_shuffled_vec(10_000);

    criterion.bench_function("slice_walk_10000", |b| {
        b.iter(|| black_box(sequence.as_slice().iter().sum::<u64>()))
    });
}

fn bench_reverse_copy_10000(criterion: &mut Criterion) {
    let sequence = create_shuffled_vec(10_000);

    criterion.bench_function("reverse_copy_10000", |b| {
        b.iter(|| black_box(copy_range(sequence.rbegin(), sequence.rend())))
    });
}

fn bench_lower_bound_10000(criterion: &mut Criterion) {
    let mut sequence = create_shuffled_vec(10_000);
    SequenceMut::sort(&mut sequence);

    criterion.bench_function("lower_bound_10000", |b| {
        b.iter(|| {
            for item in (0..10_000).step_by(97) {
                black_box(lower_bound(sequence.begin(), sequence.end(), &item));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_cursor_walk_10000,
    bench_slice_walk_10000,
    bench_reverse_copy_10000,
    bench_lower_bound_10000
);
criterion_main!(benches);
