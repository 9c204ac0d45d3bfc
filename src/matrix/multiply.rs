//! Sparse matrix multiplication
//!
//! Each output row `i` is accumulated from the non-zeros of row `i` of the
//! left operand, each scaled against the matching row of the right operand.
//! The result equals the dense triple-loop product cell for cell, but only
//! touches stored entries.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::matrix::config::MultiplyConfig;
use crate::matrix::{Element, SparseMatrix};
use crate::parallel;

impl<T: Element> SparseMatrix<T> {
    /// Returns the matrix product `self × other`
    ///
    /// Uses [`MultiplyConfig::default`], which picks the parallel kernel for
    /// large left operands.
    ///
    /// # Errors
    ///
    /// * [`Error::DimensionMismatch`] if `self.cols() != other.rows()`
    /// * [`Error::Overflow`] if a product or partial sum does not fit in `T`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, &MultiplyConfig::default())
    }

    /// Returns the matrix product `self × other` using the given configuration
    pub fn multiply_with(&self, other: &Self, config: &MultiplyConfig) -> Result<Self> {
        if config.use_parallel(self.nnz()) {
            parallel::multiply_parallel(self, other, config)
        } else {
            multiply_sequential(self, other)
        }
    }
}

/// Single-threaded row-by-row multiplication
pub fn multiply_sequential<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_dimensions(a, b)?;

    let mut result = SparseMatrix::new(a.rows(), b.cols());
    for (row, lhs_row) in grouped_rows(a) {
        for (j, value) in multiply_row(row, &lhs_row, b)? {
            result.store((row, j), value);
        }
    }

    Ok(result)
}

/// Splits the stored entries of `a` into `(row, [(col, value)])` groups,
/// skipping empty rows
pub(crate) fn grouped_rows<T: Element>(a: &SparseMatrix<T>) -> Vec<(usize, Vec<(usize, T)>)> {
    let mut rows: Vec<(usize, Vec<(usize, T)>)> = Vec::new();
    for ((i, k), value) in a.iter() {
        match rows.last_mut() {
            Some((row, entries)) if *row == i => entries.push((k, value)),
            _ => rows.push((i, vec![(k, value)])),
        }
    }
    rows
}

/// Verifies that `a.cols() == b.rows()`
pub(crate) fn check_dimensions<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(Error::dimension_mismatch("multiply", a.shape(), b.shape()));
    }
    Ok(())
}

/// Computes the non-zero cells of output row `row`
///
/// `lhs_row` holds the `(k, value)` non-zeros of the left operand's row.
/// Returned cells are sorted by column and never zero.
pub(crate) fn multiply_row<T: Element>(
    row: usize,
    lhs_row: &[(usize, T)],
    b: &SparseMatrix<T>,
) -> Result<Vec<(usize, T)>> {
    let mut accum: BTreeMap<usize, T> = BTreeMap::new();

    for &(k, a_val) in lhs_row {
        for (j, b_val) in b.row_iter(k) {
            let overflow = || Error::Overflow {
                op: "multiply",
                row,
                col: j,
            };
            let product = a_val.checked_mul(&b_val).ok_or_else(overflow)?;
            let slot = accum.entry(j).or_insert_with(T::zero);
            *slot = slot.checked_add(&product).ok_or_else(overflow)?;
        }
    }

    // Dot products of non-zero terms can still cancel to zero
    Ok(accum.into_iter().filter(|(_, value)| !value.is_zero()).collect())
}
