//! Element-wise addition and subtraction

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns `self + other`
    ///
    /// The result is the sparse union of both operands; cells whose sum is
    /// zero are dropped.
    ///
    /// # Errors
    ///
    /// * [`Error::DimensionMismatch`] if the shapes differ
    /// * [`Error::Overflow`] if a cell sum does not fit in `T`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, "add", T::checked_add)
    }

    /// Returns `self - other`
    ///
    /// # Errors
    ///
    /// * [`Error::DimensionMismatch`] if the shapes differ
    /// * [`Error::Overflow`] if a cell difference does not fit in `T`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, "subtract", T::checked_sub)
    }

    /// Seeds the result with `self`, then folds each of `other`'s entries in
    fn combine<F>(&self, other: &Self, op: &'static str, apply: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> Option<T>,
    {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(op, self.shape(), other.shape()));
        }

        let mut result = self.clone();
        for ((row, col), value) in other.iter() {
            let current = result.get_element(row, col);
            let combined = apply(&current, &value).ok_or(Error::Overflow { op, row, col })?;
            result.store((row, col), combined);
        }

        Ok(result)
    }
}
