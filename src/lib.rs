//! # sparsemat: dictionary-of-keys sparse integer matrices
//!
//! A sparse matrix stores only its non-zero cells in a map keyed by
//! `(row, col)`. Reading any other cell yields zero, and no operation ever
//! leaves a stored zero behind.
//!
//! ## Overview
//!
//! - **Construction**: empty from dimensions, or parsed from the plain-text
//!   format (see [`matrix::text`])
//! - **Access**: [`SparseMatrix::get_element`] / [`SparseMatrix::set_element`]
//! - **Arithmetic**: [`SparseMatrix::add`], [`SparseMatrix::subtract`],
//!   [`SparseMatrix::multiply`], each producing a fresh matrix
//! - **Parallelism**: large products are split by row across Rayon workers
//!   (see [`parallel`])
//!
//! ## Usage
//!
//! ```
//! use sparsemat::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n".parse().unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.to_string(), "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n");
//! ```

pub mod error;
pub mod matrix;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use error::{Error, Result};
pub use matrix::config::{MultiplyConfig, MultiplyStrategy, SystemParameters};
pub use matrix::multiply::multiply_sequential;
pub use matrix::{Coord, Element, MatrixBuilder, SparseMatrix};
pub use parallel::multiply_parallel;
pub use utils::{from_dense, to_dense};

/// Version information for the sparsemat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
