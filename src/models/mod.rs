//! Request and Response models for the generator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{GenerateRequest, SeedRequest};
pub use responses::{ClearResponse, HealthResponse, SeedResponse, StatsResponse};
