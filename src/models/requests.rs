//! Request DTOs for the generator API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::generator::GenerationOptions;

/// Request body for `POST /generate`
///
/// # Fields
/// - `schema`: The JSON Schema document to generate from
/// - `strict`: Strict mode, server default when omitted
/// - `propertyName`: Hint for name-based heuristics
/// - `useCache`: Set to false to bypass the result cache (default: true)
/// - `seed`: Reseed the shared random source before generating
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub schema: Value,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub use_cache: Option<bool>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.schema.is_null() {
            return Some("Request must include a schema".to_string());
        }
        if matches!(&self.property_name, Some(name) if name.trim().is_empty()) {
            return Some("propertyName cannot be blank".to_string());
        }
        None
    }

    /// Builds generation options, falling back to `default_strict`.
    pub fn options(&self, default_strict: bool) -> GenerationOptions {
        GenerationOptions {
            strict: self.strict.unwrap_or(default_strict),
            property_name: self.property_name.clone(),
            use_cache: self.use_cache.unwrap_or(true),
            seed: self.seed,
        }
    }
}

/// Request body for `PUT /seed`
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRequest {
    pub seed: u64,
}
