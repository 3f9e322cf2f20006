//! API Module
//!
//! HTTP handlers and routing for the subspace server REST API.
//!
//! # Endpoints
//! - `GET /` - Service banner
//! - `GET /health` - Health check endpoint
//! - `POST /api/compute` - Compute the four fundamental subspaces
//! - `GET /api/examples` - Sample matrices
//! - `GET /api/cache/stats` - Cache statistics
//! - `DELETE /api/cache/clear` - Clear the result cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
