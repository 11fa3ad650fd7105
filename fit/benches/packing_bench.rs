use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use diskfit::entities::Inventory;
use diskfit::probs::exact::{CancellationToken, exact_fit};
use diskfit::probs::split::split;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: u64 = 5000;

fn random_inventory(seed: u64, n: usize, min_size: u64, max_size: u64) -> Inventory {
    let mut rng = SmallRng::seed_from_u64(seed);
    Inventory::from_entries(
        (0..n).map(|i| (format!("file_{i}"), rng.random_range(min_size..=max_size))),
    )
    .unwrap()
}

fn split_bench(c: &mut Criterion) {
    let inventory = random_inventory(0, 1000, 1, CAPACITY);
    c.bench_function("split_1000_items", |b| {
        b.iter(|| split(black_box(&inventory), CAPACITY).unwrap())
    });
}

fn exact_fit_bench(c: &mut Criterion) {
    // sizes bounded from below keep the search tree shallow
    let inventory = random_inventory(0, 30, 1500, 4999);
    let token = CancellationToken::new();
    c.bench_function("exact_fit_30_items", |b| {
        b.iter(|| exact_fit(black_box(&inventory), CAPACITY, &token).unwrap())
    });
}

criterion_group!(benches, split_bench, exact_fit_bench);
criterion_main!(benches);
