//! Response DTOs for the subspace API
//!
//! Defines the structure of outgoing HTTP response bodies. Rationals are
//! serialized as exact strings such as "-3" or "1/2".

use num_rational::BigRational;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::linalg::{latex, ComputeResult, Matrix, SubspaceResult};

fn exact(v: &[BigRational]) -> Vec<String> {
    v.iter().map(ToString::to_string).collect()
}

fn exact_rows(m: &Matrix) -> Vec<Vec<String>> {
    m.iter_rows().map(exact).collect()
}

/// The input matrix echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixResponse {
    pub data: Vec<Vec<String>>,
    pub rows: usize,
    pub cols: usize,
    pub latex: String,
}

/// Reduced row-echelon form with its pivot columns.
#[derive(Debug, Clone, Serialize)]
pub struct RrefResponse {
    pub matrix: Vec<Vec<String>>,
    pub latex: String,
    pub pivots: Vec<usize>,
}

/// One fundamental subspace.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceResponse {
    pub basis: Vec<Vec<String>>,
    pub latex: Vec<String>,
    pub dimension: usize,
    pub description: String,
}

impl From<&SubspaceResult> for SpaceResponse {
    fn from(space: &SubspaceResult) -> Self {
        Self {
            basis: space.basis.iter().map(|v| exact(v)).collect(),
            latex: space.basis.iter().map(|v| latex::column_vector(v)).collect(),
            dimension: space.dimension(),
            description: format!("Subspace of R^{}", space.ambient_dimension),
        }
    }
}

/// Human-readable rank-nullity summary.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionCheck {
    pub rank_plus_nullity: String,
    pub rank_plus_left_nullity: String,
    pub valid: bool,
}

/// Response body for POST /api/compute
#[derive(Debug, Clone, Serialize)]
pub struct ComputeResponse {
    pub matrix: MatrixResponse,
    pub rank: usize,
    pub rref: RrefResponse,
    pub column_space: SpaceResponse,
    pub row_space: SpaceResponse,
    pub null_space: SpaceResponse,
    pub left_null_space: SpaceResponse,
    pub dimension_check: DimensionCheck,
    /// True when the result was served from the cache
    pub cached: bool,
}

impl ComputeResponse {
    pub fn new(result: &ComputeResult, cached: bool) -> Self {
        let (rows, cols, rank) = (result.rows(), result.cols(), result.rank());
        Self {
            matrix: MatrixResponse {
                data: exact_rows(&result.matrix),
                rows,
                cols,
                latex: latex::matrix(&result.matrix),
            },
            rank,
            rref: RrefResponse {
                matrix: exact_rows(&result.rref),
                latex: latex::matrix(&result.rref),
                pivots: result.pivots.clone(),
            },
            column_space: (&result.column_space).into(),
            row_space: (&result.row_space).into(),
            null_space: (&result.null_space).into(),
            left_null_space: (&result.left_null_space).into(),
            dimension_check: DimensionCheck {
                rank_plus_nullity: format!("{} + {} = {} (columns)", rank, cols - rank, cols),
                rank_plus_left_nullity: format!("{} + {} = {} (rows)", rank, rows - rank, rows),
                valid: result.dimensions_consistent(),
            },
            cached,
        }
    }
}

/// Response body for GET /api/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub current_size: usize,
    pub max_size: usize,
    pub ttl_seconds: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    pub utilization_percent: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            utilization_percent: stats.utilization_percent(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            current_size: stats.size,
            max_size: stats.capacity,
            ttl_seconds: stats.ttl_seconds,
        }
    }
}

/// Cache occupancy summary embedded in the health response.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSummary {
    pub size: usize,
    pub max_size: usize,
    pub ttl: u64,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    pub environment: String,
    pub cache: CacheSummary,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response with the current timestamp.
    pub fn healthy(environment: impl Into<String>, stats: &CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            environment: environment.into(),
            cache: CacheSummary {
                size: stats.size,
                max_size: stats.capacity,
                ttl: stats.ttl_seconds,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub environment: String,
}

impl RootResponse {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: "Spaces API - Linear Algebra Subspace Calculator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: environment.into(),
        }
    }
}

/// A named sample matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub description: &'static str,
    pub matrix: Vec<Vec<i64>>,
}

/// Response body for GET /api/examples
#[derive(Debug, Clone, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<Example>,
}

/// Response body for DELETE /api/cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
