//! Cache Key Module
//!
//! Builds order-independent cache keys from a schema and the options that
//! influence generation.

use std::fmt::Write;

use serde_json::Value;

/// Key for a top-level generation request.
///
/// Structurally identical schemas produce the same key regardless of the
/// order their object members were written in.
pub fn cache_key(schema: &Value, strict: bool, property_name: Option<&str>) -> String {
    let mut key = String::new();
    write_canonical(schema, &mut key);
    // Debug formatting quotes the name, so `None` and `Some("")` differ.
    let _ = write!(key, "|strict={}|property={:?}", strict, property_name);
    key
}

/// Serializes a JSON value with object keys sorted at every level.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (name, member)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(name.clone()).to_string());
                out.push(':');
                write_canonical(member, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
