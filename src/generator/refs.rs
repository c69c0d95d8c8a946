//! Reference Resolution Module
//!
//! Resolves in-document `$ref` pointers and guards against reference cycles.

use serde_json::Value;
use tracing::{debug, warn};

use super::{Parser, EXTERNAL_REF_NOT_SUPPORTED};
use crate::error::{GeneratorError, Result};
use crate::schema::{is_schema_shaped, Schema};

const LOCAL_REF_PREFIX: &str = "#/";

// == Ref Trail ==
/// The refs being resolved along the current call path.
///
/// Each link lives on the stack frame that resolves its ref, so the trail
/// shrinks automatically on return and sibling branches never see each
/// other's refs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefTrail<'a> {
    reference: Option<&'a str>,
    parent: Option<&'a RefTrail<'a>>,
}

impl<'a> RefTrail<'a> {
    /// An empty trail, used for top-level calls.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a trail extended by `reference`.
    pub fn push<'b>(&'b self, reference: &'b str) -> RefTrail<'b> {
        RefTrail {
            reference: Some(reference),
            parent: Some(self),
        }
    }

    pub fn contains(&self, reference: &str) -> bool {
        let mut link = Some(self);
        while let Some(current) = link {
            if current.reference == Some(reference) {
                return true;
            }
            link = current.parent;
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_none()
    }

    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut link = Some(self);
        while let Some(RefTrail { reference: Some(_), parent }) = link {
            depth += 1;
            link = *parent;
        }
        depth
    }
}

impl Parser<'_> {
    // == Resolve Ref ==
    /// Generates a value for the schema a `$ref` points at.
    ///
    /// A ref already on the trail yields `null`; refs outside the document yield
    /// the `EXTERNAL_REF_NOT_SUPPORTED` sentinel.
    pub(super) fn resolve_ref(
        &mut self,
        reference: &str,
        trail: &RefTrail<'_>,
        property_name: Option<&str>,
    ) -> Result<Value> {
        if trail.contains(reference) {
            warn!(
                reference,
                depth = trail.depth(),
                "Circular $ref detected, substituting null"
            );
            return Ok(Value::Null);
        }

        if !reference.starts_with(LOCAL_REF_PREFIX) {
            debug!(reference, "External $ref is not supported");
            return Ok(Value::String(EXTERNAL_REF_NOT_SUPPORTED.to_string()));
        }

        let target = resolve_pointer(self.document.raw(), reference)?;
        let schema = Schema::from_value_at(target, reference).map_err(|e| match e {
            GeneratorError::SchemaParse(reason) => GeneratorError::schema_ref(reference, reason),
            other => other,
        })?;
        debug!(reference, depth = trail.depth() + 1, "Resolved $ref");

        let trail = trail.push(reference);
        self.parse(&schema, &trail, property_name)
    }
}

/// Walks the root document along a `#/a/b/0` pointer.
///
/// Segments are JSON-pointer unescaped; numeric segments index arrays.
pub fn resolve_pointer<'v>(root: &'v Value, reference: &str) -> Result<&'v Value> {
    let pointer = reference.strip_prefix(LOCAL_REF_PREFIX).ok_or_else(|| {
        GeneratorError::schema_ref(reference, "only in-document references are supported")
    })?;

    let mut current = root;
    for raw_segment in pointer.split('/') {
        let segment = raw_segment.replace("~1", "/").replace("~0", "~");
        let next = match current {
            Value::Object(map) => map.get(&segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.ok_or_else(|| {
            GeneratorError::schema_ref(reference, format!("segment '{}' not found", segment))
        })?;
    }

    if !is_schema_shaped(current) {
        return Err(GeneratorError::schema_ref(
            reference,
            "reference does not point to a schema",
        ));
    }
    Ok(current)
}
