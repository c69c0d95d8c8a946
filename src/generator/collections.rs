//! Boolean, array and object generation.

use serde_json::{Map, Value};

use super::{Parser, RefTrail};
use crate::error::Result;
use crate::schema::{AdditionalProperties, Items, Schema};

/// Chance that strict mode keeps an optional property.
const OPTIONAL_PROPERTY_RATE: f64 = 0.9;
const MAX_ADDITIONAL_PROPERTIES: i64 = 3;
const ADDITIONAL_VALUE: &str = "additional_value";

impl Parser<'_> {
    pub(super) fn generate_boolean(&mut self) -> bool {
        self.rng.next_f64() > 0.5
    }

    pub(super) fn generate_array(
        &mut self,
        schema: &Schema,
        trail: &RefTrail<'_>,
        property_name: Option<&str>,
    ) -> Result<Value> {
        let min_items = schema.min_items.unwrap_or(if self.strict { 1 } else { 0 });
        let headroom = if self.strict { 2 } else { 5 };
        let max_items = schema
            .max_items
            .unwrap_or_else(|| min_items.saturating_add(headroom).max(10));
        let extra = self
            .rng
            .int_inclusive(0, max_items.saturating_sub(min_items) as i64);
        let count = min_items + extra as usize;

        let values = match &schema.items {
            None => Vec::new(),
            Some(Items::Tuple(positional)) => {
                let mut values = Vec::with_capacity(count.min(positional.len()));
                for item in positional.iter().take(count) {
                    values.push(self.parse(item, trail, property_name)?);
                }
                values
            }
            Some(Items::Single(item)) => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.parse(item, trail, property_name)?);
                }
                values
            }
        };
        Ok(Value::Array(values))
    }

    /// Required properties are always present. Optional ones are always
    /// present in lenient mode and kept at `OPTIONAL_PROPERTY_RATE` in strict mode.
    pub(super) fn generate_object(
        &mut self,
        schema: &Schema,
        trail: &RefTrail<'_>,
    ) -> Result<Value> {
        let Some(properties) = &schema.properties else {
            return Ok(Value::Object(Map::new()));
        };

        let mut object = Map::new();
        for (name, property) in properties {
            let include = schema.is_required(name)
                || !self.strict
                || self.rng.chance(OPTIONAL_PROPERTY_RATE);
            if include {
                let value = self.parse(property, trail, Some(name.as_str()))?;
                object.insert(name.clone(), value);
            }
        }

        match &schema.additional_properties {
            Some(AdditionalProperties::Allowed(true)) => {
                for i in 0..self.additional_count() {
                    let value = Value::String(ADDITIONAL_VALUE.to_string());
                    object.insert(format!("extra_{}", i), value);
                }
            }
            Some(AdditionalProperties::Schema(extra)) => {
                for i in 0..self.additional_count() {
                    let name = format!("extra_{}", i);
                    if object.contains_key(&name) {
                        continue;
                    }
                    let value = self.parse(extra, trail, Some(name.as_str()))?;
                    object.insert(name, value);
                }
            }
            _ => {}
        }

        Ok(Value::Object(object))
    }

    fn additional_count(&mut self) -> i64 {
        self.rng.int_inclusive(0, 4).min(MAX_ADDITIONAL_PROPERTIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSource;
    use crate::schema::{SchemaDocument, MAX_SIZE_KEYWORD};
    use serde_json::json;

    fn generate(schema: &Value, strict: bool, seed: u64) -> Value {
        let document = SchemaDocument::from_value(schema.clone()).unwrap();
        let mut rng = RandomSource::seeded(seed);
        let mut parser = Parser::new(&document, &mut rng, strict);
        parser.parse(document.root(), &RefTrail::root(), None).unwrap()
    }

    #[test]
    fn test_boolean_values() {
        let schema = json!({"type": "boolean"});
        let values: Vec<Value> = (0..100).map(|seed| generate(&schema, false, seed)).collect();
        assert!(values.contains(&json!(true)));
        assert!(values.contains(&json!(false)));
    }

    #[test]
    fn test_fixed_size_array() {
        let schema = json!({
            "type": "array", "items": {"type": "boolean"}, "minItems": 2, "maxItems": 2
        });
        for seed in 0..50 {
            let value = generate(&schema, false, seed);
            let items = value.as_array().unwrap();
            assert_eq!(items.len(), 2);
            assert!(items.iter().all(Value::is_boolean));
        }
    }

    #[test]
    fn test_array_default_sizes() {
        let schema = json!({"type": "array", "items": {"type": "null"}});
        for seed in 0..100 {
            let lenient = generate(&schema, false, seed);
            assert!(lenient.as_array().unwrap().len() <= 10);

            let strict = generate(&schema, true, seed);
            let len = strict.as_array().unwrap().len();
            assert!((1..=10).contains(&len));
        }
    }

    #[test]
    fn test_huge_min_items_is_capped() {
        let schema = json!({"type": "array", "items": {"type": "null"}, "minItems": 1e20});
        let len = generate(&schema, true, 1).as_array().unwrap().len();
        assert!((MAX_SIZE_KEYWORD..=MAX_SIZE_KEYWORD + 2).contains(&len));
    }

    #[test]
    fn test_array_without_items_is_empty() {
        let schema = json!({"type": "array", "minItems": 3});
        assert_eq!(generate(&schema, false, 1), json!([]));
    }

    #[test]
    fn test_tuple_items() {
        let schema = json!({
            "type": "array",
            "items": [{"type": "boolean"}, {"type": "null"}],
            "minItems": 5,
            "maxItems": 5
        });
        let value = generate(&schema, false, 1);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_boolean());
        assert!(items[1].is_null());

        let short = json!({
            "type": "array",
            "items": [{"type": "boolean"}, {"type": "null"}],
            "minItems": 1,
            "maxItems": 1
        });
        assert_eq!(generate(&short, false, 1).as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_object_without_properties_is_empty() {
        let schema = json!({"type": "object", "additionalProperties": true});
        assert_eq!(generate(&schema, false, 1), json!({}));
    }

    #[test]
    fn test_required_present_in_both_modes() {
        let schema = json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "name": {"type": "string"},
                "note": {"type": "null"}
            },
            "required": ["id", "name"]
        });
        for seed in 0..50 {
            for strict in [true, false] {
                let value = generate(&schema, strict, seed);
                assert!(value.get("id").is_some());
                assert!(value.get("name").is_some());
            }
        }
    }

    #[test]
    fn test_optional_properties_strict_vs_lenient() {
        let schema = json!({
            "type": "object", "properties": {"a": {"type": "string"}}, "required": []
        });

        let strict_omitted = (0..200).any(|seed| generate(&schema, true, seed).get("a").is_none());
        assert!(strict_omitted);

        assert!((0..200).all(|seed| generate(&schema, false, seed).get("a").is_some()));
    }

    #[test]
    fn test_additional_properties_flag() {
        let schema = json!({
            "type": "object",
            "properties": {"a": {"type": "null"}},
            "additionalProperties": true
        });
        let mut saw_extra = false;
        for seed in 0..50 {
            let value = generate(&schema, false, seed);
            let object = value.as_object().unwrap();
            assert!(object.len() <= 4);
            for (name, v) in object.iter().filter(|(name, _)| name.starts_with("extra_")) {
                saw_extra = true;
                assert!(["extra_0", "extra_1", "extra_2"].contains(&name.as_str()));
                assert_eq!(v, &json!(ADDITIONAL_VALUE));
            }
        }
        assert!(saw_extra);
    }

    #[test]
    fn test_additional_properties_schema_skips_collisions() {
        let schema = json!({
            "type": "object",
            "properties": {"extra_0": {"type": "null"}},
            "required": ["extra_0"],
            "additionalProperties": {"type": "boolean"}
        });
        for seed in 0..50 {
            let value = generate(&schema, false, seed);
            assert_eq!(value["extra_0"], Value::Null);
            for (name, v) in value.as_object().unwrap() {
                if name != "extra_0" {
                    assert!(v.is_boolean());
                }
            }
        }
    }

    #[test]
    fn test_property_name_drives_heuristics() {
        let schema = json!({
            "type": "object",
            "properties": {"email": {"type": "string"}, "age": {"type": "integer"}},
            "required": ["email", "age"]
        });
        let value = generate(&schema, false, 3);
        assert!(value["email"].as_str().unwrap().ends_with("@example.com"));
        let age = value["age"].as_i64().unwrap();
        assert!((18..78).contains(&age));
    }
}
