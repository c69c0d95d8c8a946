//! Schema Mock - JSON Schema driven mock data generator
//!
//! Produces plausible JSON values for a schema, with `$ref` resolution,
//! composition keywords, seeded randomness and a bounded result cache.
//! The same engine is served over HTTP by the `schema_mock` binary.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod random;
pub mod schema;
pub mod tasks;

pub use api::AppState;
pub use cache::GenerationCache;
pub use config::Config;
pub use error::{GeneratorError, Result};
pub use generator::{generate, generate_uncached, GenerationOptions};
pub use random::RandomSource;
pub use schema::SchemaDocument;
pub use tasks::spawn_cleanup_task;
