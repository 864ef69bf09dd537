use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndgrid::{Coordinate, Grid};

fn bench_allocate(c: &mut Criterion) {
    c.bench_function("allocate_3x32", |b| {
        b.iter(|| Grid::<f32>::new(black_box(3), black_box(32)))
    });
}

fn bench_at(c: &mut Criterion) {
    let grid: Grid<f32> = Grid::filled(3, 32, 1.0).unwrap();
    let coord = Coordinate::from([7, 19, 30]);
    c.bench_function("at", |b| b.iter(|| grid.at(black_box(&coord))));
}

fn bench_sweep(c: &mut Criterion) {
    let mut grid: Grid<u32> = Grid::new(2, 64).unwrap();
    c.bench_function("sweep_at_mut_64x64", |b| {
        b.iter(|| {
            for linear in 0..grid.len() {
                if let Some(coord) = grid.coordinate_of::<usize>(linear) {
                    if let Ok(cell) = grid.at_mut(&coord) {
                        *cell += 1;
                    }
                }
            }
        })
    });
}

fn bench_neighbors_of(c: &mut Criterion) {
    let grid: Grid<u8> = Grid::new(2, 16).unwrap();
    let center = Coordinate::from([8, 8]);
    c.bench_function("neighbors_of_2d", |b| {
        b.iter(|| grid.neighbors_of(black_box(&center)))
    });
}

criterion_group!(benches, bench_allocate, bench_at, bench_sweep, bench_neighbors_of);
criterion_main!(benches);
