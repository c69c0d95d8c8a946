//! Generator Module
//!
//! Produces JSON values that satisfy a decoded schema. [`generate`] is the
//! top-level entry point and owns the cache policy; everything below it
//! recurses through [`Parser::parse`].

mod collections;
mod number;
mod refs;
mod string;


use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::cache::{cache_key, GenerationCache};
use crate::error::Result;
use crate::random::RandomSource;
use crate::schema::{Schema, SchemaDocument, SchemaKind, TypeName};

pub use refs::{resolve_pointer, RefTrail};

// == Sentinels ==
/// Returned for a type the generator cannot produce.
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
/// Returned for a `$ref` that points outside the current document.
pub const EXTERNAL_REF_NOT_SUPPORTED: &str = "EXTERNAL_REF_NOT_SUPPORTED";

// == Generation Options ==
/// Per-call options.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Tighter defaults, probabilistic optional properties, no untyped object fallback
    pub strict: bool,
    /// Hint for name-based string and number heuristics
    pub property_name: Option<String>,
    /// Consult and fill the result cache
    pub use_cache: bool,
    /// Reseed the random source before generating
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            strict: false,
            property_name: None,
            use_cache: true,
            seed: None,
        }
    }
}

impl GenerationOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn property_name(mut self, name: impl Into<String>) -> Self {
        self.property_name = Some(name.into());
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// == Entry Points ==
/// Generates one value for `document`.
///
/// With `use_cache` set, a structurally identical request made with the same
/// `strict` and `property_name` is answered from `cache`.
pub fn generate(
    document: &SchemaDocument,
    options: &GenerationOptions,
    rng: &mut RandomSource,
    cache: &mut GenerationCache,
) -> Result<Value> {
    if let Some(seed) = options.seed {
        rng.reseed(seed);
    }

    let trail = RefTrail::root();
    let property_name = options.property_name.as_deref();

    // Only top-level results are cached.
    let key = options
        .use_cache
        .then(|| cache_key(document.raw(), options.strict, property_name));

    if let Some(key) = &key {
        if let Some(value) = cache.get(key) {
            debug!("Generation cache hit");
            return Ok(value);
        }
        debug!("Generation cache miss");
    }

    let value =
        Parser::new(document, rng, options.strict).parse(document.root(), &trail, property_name)?;

    if let Some(key) = key {
        cache.insert(key, value.clone());
    }
    Ok(value)
}

/// Generates one value without touching any cache.
pub fn generate_uncached(
    document: &SchemaDocument,
    options: &GenerationOptions,
    rng: &mut RandomSource,
) -> Result<Value> {
    if let Some(seed) = options.seed {
        rng.reseed(seed);
    }
    Parser::new(document, rng, options.strict).parse(
        document.root(),
        &RefTrail::root(),
        options.property_name.as_deref(),
    )
}

// == Parser ==
/// Recursive generation state for one top-level call.
pub(crate) struct Parser<'a> {
    document: &'a SchemaDocument,
    rng: &'a mut RandomSource,
    strict: bool,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        document: &'a SchemaDocument,
        rng: &'a mut RandomSource,
        strict: bool,
    ) -> Self {
        Self {
            document,
            rng,
            strict,
        }
    }

    /// Generates a value for one schema node.
    pub(crate) fn parse(
        &mut self,
        schema: &Schema,
        trail: &RefTrail<'_>,
        property_name: Option<&str>,
    ) -> Result<Value> {
        match &schema.kind {
            SchemaKind::Ref(reference) => self.resolve_ref(reference, trail, property_name),
            SchemaKind::OneOf(branches) | SchemaKind::AnyOf(branches) => {
                match self.rng.pick(branches) {
                    Some(branch) => self.parse(branch, trail, property_name),
                    None => Ok(Value::Null),
                }
            }
            SchemaKind::AllOf(branches) => {
                let mut merged = Map::new();
                for branch in branches {
                    // Non-object branch results contribute nothing.
                    if let Value::Object(fields) = self.parse(branch, trail, property_name)? {
                        merged.extend(fields);
                    }
                }
                Ok(Value::Object(merged))
            }
            SchemaKind::Type(type_name) => {
                self.generate_type(schema, type_name, trail, property_name)
            }
            SchemaKind::TypeUnion(type_names) => match self.rng.pick(type_names) {
                Some(type_name) => self.generate_type(schema, type_name, trail, property_name),
                None => self.generate_untyped(schema, trail),
            },
            SchemaKind::Untyped => self.generate_untyped(schema, trail),
        }
    }

    fn generate_type(
        &mut self,
        schema: &Schema,
        type_name: &TypeName,
        trail: &RefTrail<'_>,
        property_name: Option<&str>,
    ) -> Result<Value> {
        match type_name {
            TypeName::String => Ok(Value::String(self.generate_string(schema, property_name))),
            TypeName::Number => Ok(self.generate_number(schema, property_name, false)),
            TypeName::Integer => Ok(self.generate_number(schema, property_name, true)),
            TypeName::Boolean => Ok(Value::Bool(self.generate_boolean())),
            TypeName::Array => self.generate_array(schema, trail, property_name),
            TypeName::Object => self.generate_object(schema, trail),
            TypeName::Null => Ok(Value::Null),
            TypeName::Other(_) => self.generate_untyped(schema, trail),
        }
    }

    /// Lenient mode treats an untyped schema with `properties` as an object.
    fn generate_untyped(&mut self, schema: &Schema, trail: &RefTrail<'_>) -> Result<Value> {
        if schema.properties.is_some() && !self.strict {
            self.generate_object(schema, trail)
        } else {
            Ok(Value::String(UNKNOWN_TYPE.to_string()))
        }
    }
}

/// Converts a generated number, emitting integral values as JSON integers.
pub(crate) fn number_value(n: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
