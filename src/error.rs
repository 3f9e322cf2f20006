//! Error types for the subspace server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Invalid Matrix Error ==
/// Reasons a raw matrix is rejected before any computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMatrixError {
    /// No rows at all
    #[error("Matrix cannot be empty")]
    Empty,

    /// First row has no entries
    #[error("Matrix cannot have zero columns")]
    NoColumns,

    /// A row's length differs from the first row's
    #[error("All rows must have the same number of columns: row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An entry is not an integer, finite decimal, or fraction
    #[error("Invalid numeric value in matrix at row {row}, column {col}: {value}")]
    NonNumeric {
        row: usize,
        col: usize,
        value: String,
    },

    /// Too many rows for the configured limit
    #[error("Number of rows must be <= {limit}, got {found}")]
    TooManyRows { limit: usize, found: usize },

    /// Too many columns for the configured limit
    #[error("Number of columns must be <= {limit}, got {found}")]
    TooManyColumns { limit: usize, found: usize },
}

// == Subspace Error Enum ==
/// Unified error type for the subspace server.
#[derive(Error, Debug)]
pub enum SubspaceError {
    /// Malformed input matrix
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(#[from] InvalidMatrixError),

    /// A post-condition of the reduction failed. Indicates a bug, not bad input.
    #[error("Arithmetic invariant violated: {0}")]
    ArithmeticInvariant(String),

    /// The blocking compute task panicked or was cancelled
    #[error("Compute task failed: {0}")]
    TaskFailed(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SubspaceError {
    fn into_response(self) -> Response {
        let status = match &self {
            SubspaceError::InvalidMatrix(_) => StatusCode::BAD_REQUEST,
            SubspaceError::ArithmeticInvariant(_) | SubspaceError::TaskFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the subspace server.
pub type Result<T> = std::result::Result<T, SubspaceError>;
