//! Sequential versus parallel compression benchmarks
//!
//! Run with: cargo bench --bench engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tilepress_core::{CompressionRate, Dimensions, Image};
use tilepress_engine::{compress_parallel, compress_sequential};

fn create_test_image(width: u32, height: u32) -> Image {
    Image::from_fn(Dimensions::new(width, height), |x, y| {
        [((x * 255) / width) as u8, ((y * 255) / height) as u8, 128]
    })
    .unwrap()
}

fn bench_sequential_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequential by Image Size");

    for &size in &[128u32, 512, 1024] {
        let image = create_test_image(size, size);
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &image,
            |b, image| {
                b.iter(|| {
                    let mut copy = image.clone();
                    compress_sequential(black_box(&mut copy), CompressionRate::High).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_parallel_by_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel by Worker Count");
    let image = create_test_image(1024, 1024);

    for &workers in &[1usize, 2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                let mut copy = image.clone();
                compress_parallel(black_box(&mut copy), CompressionRate::Medium, workers).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel by Rate");
    let image = create_test_image(512, 512);

    for rate in CompressionRate::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| {
                let mut copy = image.clone();
                compress_parallel(black_box(&mut copy), rate, 4).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_by_size, bench_parallel_by_workers, bench_rates);
criterion_main!(benches);
