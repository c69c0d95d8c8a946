//! Schema Model Module
//!
//! Decodes a JSON Schema document into typed nodes once, at load time. The
//! dispatch decision for each node is captured in [`SchemaKind`] so the
//! generator matches exhaustively instead of comparing keyword strings.

mod decode;

use serde_json::Value;

use crate::error::{GeneratorError, Result};

// == Type Names ==
/// A single JSON Schema `type` keyword value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
    /// Any type name the generator does not know
    Other(String),
}

impl TypeName {
    pub fn parse(name: &str) -> Self {
        match name {
            "string" => TypeName::String,
            "number" => TypeName::Number,
            "integer" => TypeName::Integer,
            "boolean" => TypeName::Boolean,
            "array" => TypeName::Array,
            "object" => TypeName::Object,
            "null" => TypeName::Null,
            other => TypeName::Other(other.to_string()),
        }
    }
}

// == Schema Kind ==
/// How a schema node is dispatched, in fixed precedence order:
/// `$ref`, `oneOf`, `anyOf`, `allOf`, then `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Ref(String),
    OneOf(Vec<Schema>),
    AnyOf(Vec<Schema>),
    AllOf(Vec<Schema>),
    Type(TypeName),
    /// `type` given as an array; one member is picked per generation
    TypeUnion(Vec<TypeName>),
    /// No usable `type` keyword
    Untyped,
}

// == Keyword Values ==
/// `items` as a single schema or a positional tuple.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    Single(Box<Schema>),
    Tuple(Vec<Schema>),
}

/// `additionalProperties` as a flag or a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// `exclusiveMinimum`/`exclusiveMaximum` in draft-4 boolean or draft-6 numeric form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExclusiveBound {
    Flag(bool),
    Value(f64),
}

/// Ceiling applied to `minLength`, `maxLength`, `minItems` and `maxItems`.
pub const MAX_SIZE_KEYWORD: usize = 65_536;

// == Schema ==
/// A decoded schema node. Never mutated by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    /// Declared properties in document order
    pub properties: Option<Vec<(String, Schema)>>,
    pub required: Vec<String>,
    pub additional_properties: Option<AdditionalProperties>,
    pub items: Option<Items>,
    pub enum_values: Option<Vec<Value>>,
    pub format: Option<String>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<ExclusiveBound>,
    pub exclusive_maximum: Option<ExclusiveBound>,
    pub multiple_of: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

impl Schema {
    /// Decodes a schema node. `null` or a non-schema value is a parse error.
    pub fn from_value(value: &Value) -> Result<Self> {
        decode::decode(value, "#")
    }

    /// Decodes a node found at `path` inside a larger document; `path` only
    /// prefixes error messages.
    pub fn from_value_at(value: &Value, path: &str) -> Result<Self> {
        decode::decode(value, path)
    }

    /// Returns true when `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Returns true for values that can stand as a schema (objects and booleans).
pub fn is_schema_shaped(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Bool(_))
}

// == Schema Document ==
/// A root schema together with its raw JSON, which `$ref` pointers walk.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    raw: Value,
    root: Schema,
}

impl SchemaDocument {
    /// Decodes a root document. An absent (`null`) root is a parse error.
    pub fn from_value(raw: Value) -> Result<Self> {
        if raw.is_null() {
            return Err(GeneratorError::SchemaParse("schema is required".to_string()));
        }
        let root = Schema::from_value(&raw)?;
        Ok(Self { raw, root })
    }

    /// Parses and decodes a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| GeneratorError::SchemaParse(format!("invalid JSON: {}", e)))?;
        Self::from_value(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn root(&self) -> &Schema {
        &self.root
    }
}
