use clustergen_rs::{ClusterDataConfig, ClusterDataGenerator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

fn bench_config(rows: usize, cols: usize, clusters: usize) -> ClusterDataConfig {
    ClusterDataConfig::new(rows, cols, clusters)
        .with_range(-10.0, 10.0)
        .with_max_offset(0.5)
        .with_seed(42)
}

fn benchmark_varying_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_rows");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let cols = 128;
    let clusters = 50;
    let row_counts = [1_000, 10_000, 100_000];

    for rows in row_counts.iter() {
        group.throughput(Throughput::Elements((*rows * cols) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, &rows| {
            let generator = ClusterDataGenerator::with_config(bench_config(rows, cols, clusters));
            b.iter(|| black_box(generator.generate().unwrap()));
        });
    }
    group.finish();
}

fn benchmark_varying_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_dimensions");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let rows = 10_000;
    let clusters = 50;
    let dimensions = [2, 32, 128, 512];

    for cols in dimensions.iter() {
        group.throughput(Throughput::Elements((rows * *cols) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cols), cols, |b, &cols| {
            let generator = ClusterDataGenerator::with_config(bench_config(rows, cols, clusters));
            b.iter(|| black_box(generator.generate().unwrap()));
        });
    }
    group.finish();
}

fn benchmark_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let rows = 20_000;
    let cols = 64;
    let cluster_counts = [1, 100, 10_000];

    for clusters in cluster_counts.iter() {
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(clusters),
            clusters,
            |b, &clusters| {
                let generator =
                    ClusterDataGenerator::with_config(bench_config(rows, cols, clusters));
                b.iter(|| black_box(generator.generate().unwrap()));
            },
        );
    }
    group.finish();
}

fn benchmark_chunk_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_chunk_size");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let rows = 100_000;
    let cols = 64;
    let chunk_sizes = [256, 4_096, 51_200];

    for chunk_size in chunk_sizes.iter() {
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            chunk_size,
            |b, &chunk_size| {
                let config = bench_config(rows, cols, 16).with_chunk_size_rows(chunk_size);
                let generator = ClusterDataGenerator::with_config(config);
                b.iter(|| black_box(generator.generate().unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_varying_rows,
    benchmark_varying_dimensions,
    benchmark_varying_clusters,
    benchmark_chunk_size,
);

criterion_main!(benches);
