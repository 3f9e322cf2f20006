//! Subspace Server - exact four fundamental subspaces with a result cache
//!
//! Computes column space, null space, row space and left null space of a
//! matrix in exact rational arithmetic, and serves repeated requests for the
//! same matrix from a TTL and LRU bounded cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod linalg;
pub mod models;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{InvalidMatrixError, SubspaceError};
pub use service::{CacheStatus, ComputeService};
pub use tasks::spawn_cleanup_task;
