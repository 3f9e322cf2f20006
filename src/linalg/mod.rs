//! Linear Algebra Module
//!
//! Exact rational matrices, Gauss-Jordan reduction and the four fundamental
//! subspaces.

mod analysis;
mod canonical;
pub mod latex;
mod matrix;
mod reduce;
mod subspace;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use analysis::{analyze, ComputeResult};
pub use canonical::{parse_decimal, parse_entry, CanonicalKey, Canonicalizer};
pub use matrix::Matrix;
pub use reduce::{reduce, Reduction};
pub use subspace::{
    column_space, left_null_space, null_space, row_space, SubspaceKind, SubspaceResult,
};

pub use num_rational::BigRational;
