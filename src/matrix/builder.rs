//! Two-mode matrix construction
//!
//! A matrix comes either from a serialized source (a file or a string in the
//! text format) or from explicit dimensions. [`MatrixBuilder`] accepts both
//! kinds of input and rejects combinations that do not name exactly one
//! mode.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

/// Where a serialized matrix comes from
#[derive(Debug, Clone)]
enum Source {
    Path(PathBuf),
    Text(String),
}

/// Builder for [`SparseMatrix`]
///
/// # Examples
///
/// ```
/// use sparsemat::SparseMatrix;
///
/// let empty: SparseMatrix = SparseMatrix::<i64>::builder().rows(3).cols(4).build().unwrap();
/// assert_eq!(empty.shape(), (3, 4));
///
/// let parsed: SparseMatrix = SparseMatrix::<i64>::builder()
///     .text("rows=2\ncols=2\n(0, 1, 5)\n")
///     .build()
///     .unwrap();
/// assert_eq!(parsed.get_element(0, 1), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    source: Option<Source>,
    rows: Option<usize>,
    cols: Option<usize>,
}

impl MatrixBuilder {
    /// Create a builder with nothing supplied
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the file at `path`
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(Source::Path(path.into()));
        self
    }

    /// Parse from serialized text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(Source::Text(text.into()));
        self
    }

    /// Number of rows for an empty matrix
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Number of columns for an empty matrix
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Build the matrix.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if neither a source nor dimensions were
    ///   given, if only one of rows/cols was given, or if both a source and
    ///   dimensions were given
    /// * [`Error::Format`] / [`Error::Io`] from loading the source
    pub fn build<T: Element>(self) -> Result<SparseMatrix<T>> {
        match (self.source, self.rows, self.cols) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(Error::invalid_argument(
                "source",
                "a serialized source and explicit dimensions are mutually exclusive",
            )),
            (Some(Source::Path(path)), None, None) => SparseMatrix::load(path),
            (Some(Source::Text(text)), None, None) => text.parse(),
            (None, Some(rows), Some(cols)) => Ok(SparseMatrix::new(rows, cols)),
            (None, Some(_), None) => Err(Error::invalid_argument(
                "cols",
                "rows was supplied without cols",
            )),
            (None, None, Some(_)) => Err(Error::invalid_argument(
                "rows",
                "cols was supplied without rows",
            )),
            (None, None, None) => Err(Error::invalid_argument(
                "source",
                "either a serialized source or both rows and cols are required",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dimensions() {
        let matrix: SparseMatrix = MatrixBuilder::new().rows(2).cols(5).build().unwrap();
        assert_eq!(matrix.shape(), (2, 5));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_from_text() {
        let matrix: SparseMatrix = MatrixBuilder::new()
            .text("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n")
            .build()
            .unwrap();

        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get_element(1, 1), 2);
    }

    #[test]
    fn test_neither_mode() {
        let result: Result<SparseMatrix> = MatrixBuilder::new().build();
        assert!(matches!(result, Err(Error::InvalidArgument { arg: "source", .. })));
    }

    #[test]
    fn test_partial_dimensions() {
        let result: Result<SparseMatrix> = MatrixBuilder::new().rows(3).build();
        assert!(matches!(result, Err(Error::InvalidArgument { arg: "cols", .. })));

        let result: Result<SparseMatrix> = MatrixBuilder::new().cols(3).build();
        assert!(matches!(result, Err(Error::InvalidArgument { arg: "rows", .. })));
    }

    #[test]
    fn test_both_modes() {
        let result: Result<SparseMatrix> = MatrixBuilder::new()
            .text("rows=1\ncols=1\n")
            .rows(1)
            .cols(1)
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_bad_text_is_format_error() {
        let result: Result<SparseMatrix> = MatrixBuilder::new().text("rows=2\n").build();
        assert!(matches!(result, Err(Error::Format { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<SparseMatrix> = MatrixBuilder::new()
            .path("/nonexistent/sparsemat/matrix.txt")
            .build();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
