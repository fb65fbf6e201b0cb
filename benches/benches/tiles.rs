//! Benchmarks for tile partitioning and averaging
//!
//! Run with: cargo bench --bench tiles

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tilepress_core::{CompressionRate, Dimensions, Image};
use tilepress_tiles::{average_color, derive_tile_origins, expand_tile_clipped, TileOrigin};

fn bench_derive_origins(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tile Origins");
    let dims = Dimensions::new(1920, 1080);

    for rate in CompressionRate::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| derive_tile_origins(black_box(dims), black_box(rate)));
        });
    }

    group.finish();
}

fn bench_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tile Average");
    let dims = Dimensions::new(64, 64);
    let image = Image::from_fn(dims, |x, y| [x as u8, y as u8, (x + y) as u8]).unwrap();

    for rate in CompressionRate::ALL {
        let coords = expand_tile_clipped(TileOrigin::new(0, 0), rate, dims);
        group.bench_with_input(BenchmarkId::from_parameter(rate), &coords, |b, coords| {
            b.iter(|| average_color(black_box(&image), black_box(coords)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive_origins, bench_average);
criterion_main!(benches);
