//! Criterion benchmarks for u-rectpack.
//!
//! Uses seeded random instances so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_rectpack::container::Bin;
use u_rectpack::geometry::Item;
use u_rectpack::packer::{PackOptions, Packer};
use u_rectpack::placement::Heuristic;

fn random_items(n: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Item::new(
                rng.random_range(10..200),
                rng.random_range(10..200),
                rng.random_bool(0.2),
            )
        })
        .collect()
}

fn bench_pack_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_items");
    for &n in &[50usize, 200, 500] {
        let items = random_items(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let mut packer = Packer::new(vec![Bin::new(1000, 1000); 4]);
                let mut items = items.clone();
                black_box(packer.pack(&mut items, &PackOptions::default()))
            })
        });
    }
    group.finish();
}

fn bench_pack_by_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_heuristic");
    let items = random_items(200, 7);
    for heuristic in Heuristic::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(heuristic),
            &heuristic,
            |b, &heuristic| {
                b.iter(|| {
                    let bins = (0..4)
                        .map(|_| Bin::with_heuristic(1000, 1000, heuristic))
                        .collect();
                    let mut packer = Packer::new(bins);
                    let mut items = items.clone();
                    black_box(packer.pack(&mut items, &PackOptions::default()))
                })
            },
        );
    }
    group.finish();
}

fn bench_sequential_insert(c: &mut Criterion) {
    let items = random_items(300, 3);
    c.bench_function("bin_insert_300", |b| {
        b.iter(|| {
            let mut bin = Bin::new(2000, 2000);
            let mut items = items.clone();
            for item in &mut items {
                bin.insert(item);
            }
            black_box(bin.efficiency())
        })
    });
}

criterion_group!(
    benches,
    bench_pack_by_size,
    bench_pack_by_heuristic,
    bench_sequential_insert
);
criterion_main!(benches);
