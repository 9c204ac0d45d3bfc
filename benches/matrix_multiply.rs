//! Benchmarks for sparse matrix arithmetic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsemat::{MultiplyConfig, MultiplyStrategy, SparseMatrix};

/// Banded square matrix: `2 * band + 1` entries per row
fn create_band_matrix(n: usize, band: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        for j in i.saturating_sub(band)..(i + band + 1).min(n) {
            matrix.set_element(i, j, ((i + j) % 5) as i64 + 1).unwrap();
        }
    }
    matrix
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[100usize, 1_000, 5_000] {
        let a = create_band_matrix(n, 4);
        let b = create_band_matrix(n, 4);

        for strategy in [MultiplyStrategy::Sequential, MultiplyStrategy::Parallel] {
            let config = MultiplyConfig::for_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), n),
                &n,
                |bench, _| bench.iter(|| black_box(a.multiply_with(&b, &config).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_matrix_add(c: &mut Criterion) {
    let a = create_band_matrix(5_000, 4);
    let b = create_band_matrix(5_000, 2);

    c.bench_function("add 5000x5000", |bench| {
        bench.iter(|| black_box(a.add(&b).unwrap()))
    });
}

criterion_group!(benches, bench_matrix_multiply, bench_matrix_add);
criterion_main!(benches);
