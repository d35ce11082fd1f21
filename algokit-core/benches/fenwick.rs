use algokit_core::FenwickTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_fenwick(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let values: Vec<i64> = (0..10_000).map(|_| rng.gen_range(0..1_000)).collect();

    c.bench_function("fenwick_from_slice_10k", |b| {
        b.iter(|| FenwickTree::from_slice(black_box(&values), 0))
    });

    let tree = FenwickTree::from_slice(&values, 0);
    c.bench_function("fenwick_range_query_10k", |b| {
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| {
            let left = rng.gen_range(0..5_000);
            let right = rng.gen_range(5_000..10_000);
            black_box(tree.range_query(left, right))
        })
    });

    c.bench_function("fenwick_update_10k", |b| {
        let mut tree = FenwickTree::from_slice(&values, 0);
        let mut rng = SmallRng::seed_from_u64(11);
        b.iter(|| {
            let index = rng.gen_range(0..10_000);
            tree.update(index, 1)
        })
    });
}

criterion_group!(benches, bench_fenwick);
criterion_main!(benches);
