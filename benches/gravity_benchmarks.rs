use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tilefall::core::{Grid, LevelDescriptor};

/// A tall shaft of boxes over empty space, so every pass moves every tile.
fn shaft(width: usize, height: usize) -> Grid {
    let mut rows = vec![vec![6; width]; height / 2];
    rows.extend(vec![vec![0; width]; height - height / 2]);
    Grid::from_codes(&rows).expect("shaft codes are valid")
}

pub fn bench_gravity_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("gravity_pass");

    for &size in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("falling_shaft", size), &size, |b, &size| {
            b.iter_with_setup(|| shaft(size, size), |mut grid| black_box(grid.tick()));
        });
    }

    let sample = LevelDescriptor::sample().build().expect("sample level is valid");
    group.bench_function("sample_settled", |b| {
        b.iter_with_setup(|| sample.grid.clone(), |mut grid| black_box(grid.tick()));
    });

    group.finish();
}

criterion_group!(benches, bench_gravity_pass);
criterion_main!(benches);
