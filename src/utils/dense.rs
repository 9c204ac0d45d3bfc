//! Conversion between sparse matrices and dense ndarray arrays
//!
//! The dense form is used for display and as the reference the sparse
//! product is checked against.

use ndarray::Array2;

use crate::matrix::{Element, SparseMatrix};

/// Expands a sparse matrix into a dense `rows × cols` array
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros(matrix.shape());
    for ((row, col), value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Builds a sparse matrix from a dense array, dropping the zero cells
pub fn from_dense<T: Element>(dense: &Array2<T>) -> SparseMatrix<T> {
    let (rows, cols) = dense.dim();
    let mut matrix = SparseMatrix::new(rows, cols);
    for ((row, col), &value) in dense.indexed_iter() {
        matrix.store((row, col), value);
    }
    matrix
}

impl<T: Element> SparseMatrix<T> {
    /// Expands this matrix into a dense array
    pub fn to_dense(&self) -> Array2<T> {
        to_dense(self)
    }

    /// Builds a sparse matrix from a dense array, dropping the zero cells
    pub fn from_dense(dense: &Array2<T>) -> Self {
        from_dense(dense)
    }
}
