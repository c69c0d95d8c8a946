//! API Module
//!
//! HTTP handlers and routing for the generator REST API.
//!
//! # Endpoints
//! - `POST /generate` - Generate a value for a JSON Schema
//! - `GET /cache/stats` - Get cache statistics
//! - `DELETE /cache` - Clear the result cache
//! - `PUT /seed` - Reseed the shared random source
//! - `POST /seed/reset` - Rewind the random source
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
