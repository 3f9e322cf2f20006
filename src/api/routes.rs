//! API Routes
//!
//! Configures the Axum router with all subspace server endpoints.

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    clear_handler, compute_handler, examples_handler, health_handler, root_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Service banner
/// - `GET /health` - Health check with cache occupancy
/// - `POST /api/compute` - Four fundamental subspaces of a matrix
/// - `GET /api/examples` - Sample matrices
/// - `GET /api/cache/stats` - Cache statistics
/// - `DELETE /api/cache/clear` - Empty the cache
///
/// # Middleware
/// - CORS: origins from configuration
/// - Compression: gzip when the client accepts it
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins());

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/compute", post(compute_handler))
        .route("/api/examples", get(examples_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/api/cache/clear", delete(clear_handler))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer. A "*" entry allows any origin; unparsable origins
/// are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}
