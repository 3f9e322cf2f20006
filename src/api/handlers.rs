//! API Handlers
//!
//! HTTP request handlers for each subspace server endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, SubspaceError};
use crate::models::{
    ComputeRequest, ComputeResponse, Example, ExamplesResponse, HealthResponse, MessageResponse,
    RootResponse, StatsResponse,
};
use crate::service::ComputeService;

/// Application state shared across all handlers.
///
/// The service is cheap to clone; its cache sits behind a shared mutex.
#[derive(Clone)]
pub struct AppState {
    /// Subspace computation with its result cache
    pub service: ComputeService,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: ComputeService, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ComputeService::from_config(config), config.clone())
    }
}

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::new(state.config.environment.clone()))
}

/// Handler for GET /health
///
/// Returns health status together with cache occupancy.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.service.cache_stats();
    Json(HealthResponse::healthy(
        state.config.environment.clone(),
        &stats,
    ))
}

/// Handler for POST /api/compute
///
/// Computes all four fundamental subspaces, answering from the cache when the
/// same matrix (by value) was computed recently. The reduction runs on the
/// blocking pool since its cost grows with the matrix size.
pub async fn compute_handler(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>> {
    let service = state.service.clone();
    let (result, status) =
        tokio::task::spawn_blocking(move || service.compute_with_status(&req.matrix))
            .await
            .map_err(|e| SubspaceError::TaskFailed(e.to_string()))
            .and_then(|outcome| outcome)
            .map_err(|e| {
                warn!("Compute request rejected: {}", e);
                e
            })?;

    Ok(Json(ComputeResponse::new(&result, status.is_hit())))
}

/// Handler for GET /api/examples
pub async fn examples_handler() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: examples(),
    })
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache_stats().into())
}

/// Handler for DELETE /api/cache/clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.service.clear_cache();
    info!("Cache cleared manually");
    Json(MessageResponse::new("Cache cleared successfully"))
}

fn example(name: &'static str, description: &'static str, matrix: &[&[i64]]) -> Example {
    Example {
        name,
        description,
        matrix: matrix.iter().map(|row| row.to_vec()).collect(),
    }
}

/// Sample matrices covering full rank, rank deficient, wide and tall shapes.
pub fn examples() -> Vec<Example> {
    vec![
        example(
            "3×3 Rank 2",
            "A 3×3 matrix with rank 2 (linearly dependent rows)",
            &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]],
        ),
        example(
            "3×3 Identity",
            "The 3×3 identity matrix (full rank)",
            &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]],
        ),
        example("2×2 Identity", "The 2×2 identity matrix", &[&[1, 0], &[0, 1]]),
        example(
            "4×4 Identity",
            "The 4×4 identity matrix",
            &[&[1, 0, 0, 0], &[0, 1, 0, 0], &[0, 0, 1, 0], &[0, 0, 0, 1]],
        ),
        example(
            "5×5 Identity",
            "The 5×5 identity matrix (max size)",
            &[
                &[1, 0, 0, 0, 0],
                &[0, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 0, 1, 0],
                &[0, 0, 0, 0, 1],
            ],
        ),
        example(
            "2×3 Rectangular",
            "A rectangular matrix with more columns than rows",
            &[&[1, 2, 3], &[4, 5, 6]],
        ),
        example(
            "3×2 Rectangular",
            "A rectangular matrix with more rows than columns",
            &[&[1, 2], &[3, 4], &[5, 6]],
        ),
        example(
            "3×4 Full Row Rank",
            "3×4 matrix with full row rank",
            &[&[1, 0, 2, 1], &[0, 1, 1, 2], &[0, 0, 0, 0]],
        ),
        example(
            "2×2 Singular",
            "A singular 2×2 matrix (rank 1)",
            &[&[1, 2], &[2, 4]],
        ),
        example(
            "3×3 Zero Matrix",
            "The zero matrix (rank 0)",
            &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]],
        ),
        example(
            "2×5 Wide Matrix",
            "A wide 2×5 matrix",
            &[&[1, 2, 3, 4, 5], &[6, 7, 8, 9, 10]],
        ),
        example(
            "5×2 Tall Matrix",
            "A tall 5×2 matrix",
            &[&[1, 2], &[3, 4], &[5, 6], &[7, 8], &[9, 10]],
        ),
    ]
}
