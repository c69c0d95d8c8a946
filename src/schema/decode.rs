//! Decoding of raw JSON into [`Schema`] nodes.
//!
//! Keyword values of the wrong JSON type are ignored; only subschema
//! positions that hold something other than a schema are rejected.

use serde_json::{Map, Value};

use super::{
    AdditionalProperties, ExclusiveBound, Items, Schema, SchemaKind, TypeName, MAX_SIZE_KEYWORD,
};
use crate::error::{GeneratorError, Result};

pub(super) fn decode(value: &Value, path: &str) -> Result<Schema> {
    match value {
        Value::Object(map) => decode_object(map, path),
        Value::Bool(_) => Ok(empty()),
        Value::Null => Err(GeneratorError::SchemaParse(format!(
            "schema at {} is null",
            path
        ))),
        other => Err(GeneratorError::SchemaParse(format!(
            "expected a schema object at {}, found {}",
            path,
            json_type(other)
        ))),
    }
}

fn decode_object(map: &Map<String, Value>, path: &str) -> Result<Schema> {
    let properties = match map.get("properties") {
        Some(Value::Object(props)) => {
            let mut decoded = Vec::with_capacity(props.len());
            for (name, sub) in props {
                let sub_path = format!("{}/properties/{}", path, escape(name));
                decoded.push((name.clone(), decode(sub, &sub_path)?));
            }
            Some(decoded)
        }
        _ => None,
    };

    let items = match map.get("items") {
        None | Some(Value::Null) => None,
        Some(Value::Array(list)) => {
            Some(Items::Tuple(decode_list(list, &format!("{}/items", path))?))
        }
        Some(single) => Some(Items::Single(Box::new(decode(
            single,
            &format!("{}/items", path),
        )?))),
    };

    let additional_properties = match map.get("additionalProperties") {
        Some(Value::Bool(flag)) => Some(AdditionalProperties::Allowed(*flag)),
        Some(sub @ Value::Object(_)) => Some(AdditionalProperties::Schema(Box::new(decode(
            sub,
            &format!("{}/additionalProperties", path),
        )?))),
        _ => None,
    };

    Ok(Schema {
        kind: decode_kind(map, path)?,
        properties,
        required: map
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        additional_properties,
        items,
        enum_values: map.get("enum").and_then(Value::as_array).cloned(),
        format: string_keyword(map, "format"),
        pattern: string_keyword(map, "pattern"),
        minimum: map.get("minimum").and_then(Value::as_f64),
        maximum: map.get("maximum").and_then(Value::as_f64),
        exclusive_minimum: exclusive_keyword(map, "exclusiveMinimum"),
        exclusive_maximum: exclusive_keyword(map, "exclusiveMaximum"),
        multiple_of: map
            .get("multipleOf")
            .and_then(Value::as_f64)
            .filter(|m| *m > 0.0),
        min_length: usize_keyword(map, "minLength"),
        max_length: usize_keyword(map, "maxLength"),
        min_items: usize_keyword(map, "minItems"),
        max_items: usize_keyword(map, "maxItems"),
    })
}

fn decode_kind(map: &Map<String, Value>, path: &str) -> Result<SchemaKind> {
    if let Some(reference) = map.get("$ref").and_then(Value::as_str) {
        return Ok(SchemaKind::Ref(reference.to_string()));
    }

    for keyword in ["oneOf", "anyOf", "allOf"] {
        if let Some(list) = map.get(keyword).and_then(Value::as_array) {
            if list.is_empty() {
                continue;
            }
            let branches = decode_list(list, &format!("{}/{}", path, keyword))?;
            return Ok(match keyword {
                "oneOf" => SchemaKind::OneOf(branches),
                "anyOf" => SchemaKind::AnyOf(branches),
                _ => SchemaKind::AllOf(branches),
            });
        }
    }

    Ok(match map.get("type") {
        Some(Value::String(name)) => SchemaKind::Type(TypeName::parse(name)),
        Some(Value::Array(names)) if !names.is_empty() => SchemaKind::TypeUnion(
            names
                .iter()
                .map(|n| match n {
                    Value::String(name) => TypeName::parse(name),
                    other => TypeName::Other(other.to_string()),
                })
                .collect(),
        ),
        _ => SchemaKind::Untyped,
    })
}

fn decode_list(list: &[Value], path: &str) -> Result<Vec<Schema>> {
    list.iter()
        .enumerate()
        .map(|(i, sub)| decode(sub, &format!("{}/{}", path, i)))
        .collect()
}

fn empty() -> Schema {
    Schema {
        kind: SchemaKind::Untyped,
        properties: None,
        required: Vec::new(),
        additional_properties: None,
        items: None,
        enum_values: None,
        format: None,
        pattern: None,
        minimum: None,
        maximum: None,
        exclusive_minimum: None,
        exclusive_maximum: None,
        multiple_of: None,
        min_length: None,
        max_length: None,
        min_items: None,
        max_items: None,
    }
}

fn string_keyword(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn usize_keyword(map: &Map<String, Value>, key: &str) -> Option<usize> {
    map.get(key)
        .and_then(Value::as_f64)
        .filter(|n| *n >= 0.0)
        .map(|n| (n as usize).min(MAX_SIZE_KEYWORD))
}

fn exclusive_keyword(map: &Map<String, Value>, key: &str) -> Option<ExclusiveBound> {
    match map.get(key) {
        Some(Value::Bool(flag)) => Some(ExclusiveBound::Flag(*flag)),
        Some(Value::Number(n)) => n.as_f64().map(ExclusiveBound::Value),
        _ => None,
    }
}

/// JSON-pointer escaping for error paths.
fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
