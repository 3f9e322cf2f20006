//! Service Module
//!
//! Orchestration layer between the HTTP API and the linear algebra core.

mod compute;

pub use compute::{CacheStatus, ComputeService};
