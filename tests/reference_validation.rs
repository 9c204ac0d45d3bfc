//! Validate multiplication against sprs and dense ndarray products

use ndarray::Array2;
use sparsemat::{MultiplyConfig, MultiplyStrategy, SparseMatrix};
use sprs::{CsMat, TriMat};

/// Create a simple test matrix
fn create_test_matrix() -> SparseMatrix {
    // Create a 4x4 matrix:
    // [1 2 0 0]
    // [0 3 4 0]
    // [0 0 5 6]
    // [7 0 0 8]
    SparseMatrix::from_entries(
        4,
        4,
        vec![
            ((0, 0), 1),
            ((0, 1), 2),
            ((1, 1), 3),
            ((1, 2), 4),
            ((2, 2), 5),
            ((2, 3), 6),
            ((3, 0), 7),
            ((3, 3), 8),
        ],
    )
    .unwrap()
}

/// Deterministic pseudo-random matrix with roughly `density` of cells filled
fn scattered(rows: usize, cols: usize, density: u64, seed: u64) -> SparseMatrix {
    let mut state = seed;
    let mut matrix = SparseMatrix::new(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (state >> 33) % 100 < density {
                let value = ((state >> 40) % 19) as i64 - 9;
                matrix.set_element(i, j, value).unwrap();
            }
        }
    }
    matrix
}

/// Convert to sprs format
fn to_sprs(matrix: &SparseMatrix) -> CsMat<i64> {
    let mut triplets = TriMat::new(matrix.shape());
    for ((row, col), value) in matrix.iter() {
        triplets.add_triplet(row, col, value);
    }
    triplets.to_csr()
}

/// Collect the non-zero cells of an sprs matrix in row-major order
fn sprs_entries(matrix: &CsMat<i64>) -> Vec<((usize, usize), i64)> {
    let mut entries: Vec<_> = matrix
        .iter()
        .filter(|&(&value, _)| value != 0)
        .map(|(&value, (row, col))| ((row, col), value))
        .collect();
    entries.sort();
    entries
}

/// Dense triple-loop product, the definition the sparse kernel must match
fn dense_product(a: &Array2<i64>, b: &Array2<i64>) -> Array2<i64> {
    let (n, m) = (a.nrows(), b.ncols());
    let mut c = Array2::zeros((n, m));
    for i in 0..n {
        for j in 0..m {
            c[[i, j]] = (0..a.ncols()).map(|k| a[[i, k]] * b[[k, j]]).sum();
        }
    }
    c
}

#[test]
fn test_multiply_vs_sprs() {
    let a = create_test_matrix();
    let b = create_test_matrix();

    let result = a.multiply(&b).unwrap();
    let expected = &to_sprs(&a) * &to_sprs(&b);

    assert_eq!(result.rows(), expected.rows());
    assert_eq!(result.cols(), expected.cols());
    assert_eq!(result.iter().collect::<Vec<_>>(), sprs_entries(&expected));
}

#[test]
fn test_rectangular_vs_sprs() {
    let a = scattered(17, 23, 20, 1);
    let b = scattered(23, 11, 25, 2);

    for strategy in [MultiplyStrategy::Sequential, MultiplyStrategy::Parallel] {
        let result = a
            .multiply_with(&b, &MultiplyConfig::for_strategy(strategy))
            .unwrap();
        let expected = &to_sprs(&a) * &to_sprs(&b);

        assert_eq!(result.shape(), (17, 11));
        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            sprs_entries(&expected),
            "{:?} kernel disagrees with sprs",
            strategy
        );
    }
}

#[test]
fn test_multiply_vs_dense() {
    let a = scattered(12, 9, 30, 3);
    let b = scattered(9, 14, 30, 4);

    let expected = dense_product(&a.to_dense(), &b.to_dense());
    let result = a.multiply(&b).unwrap();

    assert_eq!(result.to_dense(), expected);
    assert_eq!(result, SparseMatrix::from_dense(&expected));
}

#[test]
fn test_add_subtract_vs_dense() {
    let a = scattered(10, 10, 40, 5);
    let b = scattered(10, 10, 40, 6);

    let sum = a.add(&b).unwrap();
    let difference = a.subtract(&b).unwrap();

    assert_eq!(sum.to_dense(), a.to_dense() + b.to_dense());
    assert_eq!(difference.to_dense(), a.to_dense() - b.to_dense());
    assert!(sum.iter().all(|(_, value)| value != 0));
    assert!(difference.iter().all(|(_, value)| value != 0));
}
