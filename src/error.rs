//! Error types for the generator and its HTTP surface
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Generator Error Enum ==
/// Unified error type for schema decoding, generation and the serving layer.
///
/// Degraded outcomes such as unsupported external refs, unknown types and
/// reference cycles are returned as sentinel values, not as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Absent or malformed schema input
    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    /// Unresolvable `$ref`, or a ref whose target is not a schema
    #[error("Schema ref error for '{reference}': {reason}")]
    SchemaRef { reference: String, reason: String },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GeneratorError {
    /// Builds a `SchemaRef` error for the given reference string.
    pub fn schema_ref(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        GeneratorError::SchemaRef {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GeneratorError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match &self {
            GeneratorError::SchemaParse(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            GeneratorError::SchemaRef { reference, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "reference": reference }),
            ),
            GeneratorError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            GeneratorError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the generator.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_ref_carries_reference() {
        let err =
            GeneratorError::schema_ref("#/definitions/Missing", "segment 'Missing' not found");
        assert!(err.to_string().contains("#/definitions/Missing"));
        assert!(matches!(
            err,
            GeneratorError::SchemaRef { ref reference, .. } if reference == "#/definitions/Missing"
        ));
    }

    #[test]
    fn test_status_codes() {
        let parse = GeneratorError::SchemaParse("missing".into()).into_response();
        assert_eq!(parse.status(), StatusCode::BAD_REQUEST);

        let reference = GeneratorError::schema_ref("#/x", "missing").into_response();
        assert_eq!(reference.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let internal = GeneratorError::Internal("boom".into()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
