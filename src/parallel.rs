//! # Parallel sparse matrix multiplication
//!
//! Rows of the left operand are independent: each output row `i` depends
//! only on row `i` of `a` and on `b`. This module hands the non-empty rows
//! of `a` to Rayon workers, each of which reads both operands and owns the
//! output cells of its rows. The partial rows are joined afterwards, so no
//! output cell is written by more than one worker.

use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::config::MultiplyConfig;
use crate::matrix::multiply::{check_dimensions, grouped_rows, multiply_row};
use crate::matrix::{Element, SparseMatrix};

/// Performs sparse matrix multiplication with parallel row processing.
///
/// # Arguments
///
/// * `a` - Left input matrix
/// * `b` - Right input matrix
/// * `config` - Supplies the worker count used to size row batches
///
/// # Returns
///
/// The product `a × b`, identical to the sequential kernel's result
///
/// # Examples
///
/// ```
/// use sparsemat::{MultiplyConfig, SparseMatrix, multiply_parallel};
///
/// let a = SparseMatrix::<i64>::from_entries(2, 2, vec![((0, 0), 1), ((1, 1), 1)]).unwrap();
/// let b = SparseMatrix::<i64>::from_entries(2, 2, vec![((0, 0), 2), ((1, 1), 2)]).unwrap();
///
/// let c = multiply_parallel(&a, &b, &MultiplyConfig::default()).unwrap();
///
/// // Result should be a diagonal matrix with elements 2
/// assert_eq!(c.get_element(0, 0), 2);
/// assert_eq!(c.get_element(1, 1), 2);
/// assert_eq!(c.nnz(), 2);
/// ```
pub fn multiply_parallel<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<SparseMatrix<T>> {
    check_dimensions(a, b)?;

    let lhs_rows = grouped_rows(a);

    // Aim for roughly one batch of rows per worker
    let n_threads = config.system_params.n_threads.max(1);
    let min_len = lhs_rows.len().div_ceil(n_threads).max(1);

    let row_results: Vec<(usize, Vec<(usize, T)>)> = lhs_rows
        .into_par_iter()
        .with_min_len(min_len)
        .map(|(row, lhs_row)| multiply_row(row, &lhs_row, b).map(|cells| (row, cells)))
        .collect::<Result<_>>()?;

    // Assemble the final matrix
    let mut result = SparseMatrix::new(a.rows(), b.cols());
    for (row, cells) in row_results {
        for (col, value) in cells {
            result.store((row, col), value);
        }
    }

    Ok(result)
}
