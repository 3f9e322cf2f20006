//! Request DTOs for the subspace API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for POST /api/compute
///
/// Entries are kept as raw JSON values; the canonicalizer decides what counts
/// as numeric so it can report the offending row and column.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRequest {
    /// Rows of the matrix
    pub matrix: Vec<Vec<Value>>,
}
