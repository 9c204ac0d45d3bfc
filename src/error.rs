//! Error types for sparsemat

use thiserror::Error;

/// Result type alias using sparsemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, loading, or combining matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed serialized matrix
    #[error("Format error on line {line}: {reason}")]
    Format {
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of what was wrong
        reason: String,
    },

    /// Invalid argument provided to a constructor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Operand shapes are incompatible for the operation
    #[error("Dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation being attempted
        op: &'static str,
        /// Left-hand side shape (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape (rows, cols)
        rhs: (usize, usize),
    },

    /// Coordinate outside the declared dimensions
    #[error("Index ({row}, {col}) out of range for {rows} × {cols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// Element arithmetic left the range of the element type
    #[error("Arithmetic overflow in {op} at ({row}, {col})")]
    Overflow {
        /// The operation being attempted
        op: &'static str,
        /// Row of the output cell that overflowed
        row: usize,
        /// Column of the output cell that overflowed
        col: usize,
    },

    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a format error for the given line
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::format(3, "expected 3 fields, got 2");
        assert_eq!(err.to_string(), "Format error on line 3: expected 3 fields, got 2");

        let err = Error::dimension_mismatch("add", (2, 2), (3, 2));
        assert_eq!(err.to_string(), "Dimension mismatch in add: (2, 2) vs (3, 2)");

        let err = Error::IndexOutOfRange { row: 4, col: 0, rows: 2, cols: 2 };
        assert_eq!(err.to_string(), "Index (4, 0) out of range for 2 × 2 matrix");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
