//! Utility functions and helpers

pub mod dense;

pub use dense::{from_dense, to_dense};
