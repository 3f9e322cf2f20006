//! Request and Response models for the subspace API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ComputeRequest;
pub use responses::{
    CacheSummary, ComputeResponse, DimensionCheck, ErrorResponse, Example, ExamplesResponse,
    HealthResponse, MatrixResponse, MessageResponse, RootResponse, RrefResponse, SpaceResponse,
    StatsResponse,
};
