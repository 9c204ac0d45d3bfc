//! Dictionary-of-keys sparse matrix
//!
//! [`SparseMatrix`] stores only its non-zero cells, keyed by `(row, col)`.
//! Absent keys read as zero, and no stored value is ever zero.

pub mod arithmetic;
pub mod builder;
pub mod config;
pub mod multiply;
pub mod text;

pub use builder::MatrixBuilder;
pub use config::{MultiplyConfig, MultiplyStrategy, SystemParameters};

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use num_traits::PrimInt;

use crate::error::{Error, Result};

/// A `(row, col)` cell coordinate
pub type Coord = (usize, usize);

/// Integer types a [`SparseMatrix`] can hold
pub trait Element: PrimInt + fmt::Display + fmt::Debug + Send + Sync {}

impl<T> Element for T where T: PrimInt + fmt::Display + fmt::Debug + Send + Sync {}

/// A sparse 2-D integer matrix in dictionary-of-keys form
///
/// Dimensions are fixed at construction. Entries live in an ordered map, so
/// iteration is always row-major, which is also the serialization order.
///
/// Out-of-range reads return zero; out-of-range writes fail with
/// [`Error::IndexOutOfRange`].
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: BTreeMap<Coord, T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let entries = (0..n).map(|i| ((i, i), T::one())).collect();
        Self {
            rows: n,
            cols: n,
            entries,
        }
    }

    /// Creates a matrix from `((row, col), value)` pairs
    ///
    /// Zero values are skipped and later pairs overwrite earlier ones at the
    /// same coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if any coordinate falls outside
    /// `rows × cols`.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Coord, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for ((row, col), value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Starts a [`MatrixBuilder`]
    pub fn builder() -> MatrixBuilder {
        MatrixBuilder::new()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when every cell is zero
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value at `(row, col)`, or zero if nothing is stored there
    ///
    /// Coordinates outside the declared dimensions also read as zero.
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Sets the value at `(row, col)`
    ///
    /// Setting zero removes the entry, so the matrix never stores zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row >= rows` or `col >= cols`.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.store((row, col), value);
        Ok(())
    }

    /// Iterates over the non-zero elements in row-major order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col, value).
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries
            .range((i, 0)..=(i, usize::MAX))
            .map(|(&(_, col), &value)| (col, value))
    }

    /// Inserts or removes an in-range entry, keeping zeros out of storage
    pub(crate) fn store(&mut self, coord: Coord, value: T) {
        debug_assert!(coord.0 < self.rows && coord.1 < self.cols);
        if value.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
    }
}

/// Row-major iterator over the non-zero elements of a [`SparseMatrix`]
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, Coord, T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = (Coord, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&coord, &value)| (coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Element> IntoIterator for &'a SparseMatrix<T> {
    type Item = (Coord, T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  nnz: {}", self.entries.len())?;

        // Print a sample of the matrix content
        let max_entries_to_print = 10.min(self.entries.len());

        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for ((row, col), value) in self.entries.iter().take(max_entries_to_print) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, value)?;
            }

            if self.entries.len() > max_entries_to_print {
                writeln!(
                    f,
                    "    ... ({} more)",
                    self.entries.len() - max_entries_to_print
                )?;
            }
        }

        write!(f, "}}")
    }
}
