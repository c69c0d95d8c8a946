//! String generation: enums, property-name heuristics, formats, the one
//! recognized pattern, and random alphanumerics as the fallback.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use super::Parser;
use crate::schema::Schema;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// US social security number shape.
pub const SSN_PATTERN: &str = r"^\d{3}-\d{2}-\d{4}$";
const SSN_EXAMPLE: &str = "123-45-6789";

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Bob", "Carol", "David", "Emma", "Liam", "Olivia", "Noah",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Moore",
];
const CITIES: &[&str] = &[
    "New York", "London", "Paris", "Tokyo", "Berlin", "Sydney", "Toronto", "Madrid",
];
const COUNTRIES: &[&str] = &[
    "United States", "United Kingdom", "France", "Japan", "Germany", "Australia", "Canada", "Spain",
];
const COMPANIES: &[&str] = &[
    "Acme Corp", "Globex", "Initech", "Umbrella Inc", "Stark Industries", "Wayne Enterprises",
];
const TITLES: &[&str] = &[
    "Software Engineer", "Product Manager", "Designer", "Data Analyst", "Team Lead",
];
const DESCRIPTIONS: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "A short description of the item.",
    "Sample text generated for testing purposes.",
    "Quick summary of the record contents.",
];

const EXAMPLE_HOSTNAME: &str = "example.com";
const EXAMPLE_URI: &str = "https://example.com";
const EXAMPLE_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";
const EXAMPLE_IPV6: &str = "2001:0db8:85a3:0000:0000:8a2e:0370:7334";

impl Parser<'_> {
    /// First match wins: enum, name heuristic, format, pattern, random text.
    pub(super) fn generate_string(
        &mut self,
        schema: &Schema,
        property_name: Option<&str>,
    ) -> String {
        if let Some(choice) = schema
            .enum_values
            .as_deref()
            .and_then(|values| self.rng.pick(values))
        {
            return match choice {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }

        if let Some(value) = property_name.and_then(|name| self.string_for_name(name)) {
            return value;
        }

        if let Some(value) = schema.format.as_deref().and_then(|f| self.string_for_format(f)) {
            return value;
        }

        if schema.pattern.as_deref() == Some(SSN_PATTERN) {
            return SSN_EXAMPLE.to_string();
        }

        let min = schema.min_length.unwrap_or(0);
        let max = schema
            .max_length
            .unwrap_or_else(|| min.saturating_add(5).max(10))
            .max(min);
        let len = self.rng.int_inclusive(min as i64, max as i64) as usize;
        self.alphanumeric(len)
    }

    fn string_for_name(&mut self, name: &str) -> Option<String> {
        let name: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let has = |needle: &str| name.contains(needle);

        let value = if has("email") {
            self.email()
        } else if has("firstname") {
            self.pick_str(FIRST_NAMES)
        } else if has("lastname") {
            self.pick_str(LAST_NAMES)
        } else if has("fullname") || has("name") {
            format!("{} {}", self.pick_str(FIRST_NAMES), self.pick_str(LAST_NAMES))
        } else if has("password") {
            format!("{}!{}", self.alphanumeric(10), self.rng.int_range(10, 100))
        } else if has("phone") {
            format!(
                "+1-{:03}-{:03}-{:04}",
                self.rng.int_range(200, 1000),
                self.rng.int_range(0, 1000),
                self.rng.int_range(0, 10_000)
            )
        } else if has("city") {
            self.pick_str(CITIES)
        } else if has("country") {
            self.pick_str(COUNTRIES)
        } else if has("company") {
            self.pick_str(COMPANIES)
        } else if has("title") {
            self.pick_str(TITLES)
        } else if has("description") || has("summary") {
            self.pick_str(DESCRIPTIONS)
        } else if has("uuid") || has("id") {
            self.uuid()
        } else {
            return None;
        };
        Some(value)
    }

    fn string_for_format(&mut self, format: &str) -> Option<String> {
        let now = Utc::now();
        let value = match format {
            "date-time" => now.to_rfc3339_opts(SecondsFormat::Millis, true),
            "date" => now.format("%Y-%m-%d").to_string(),
            "time" => now.format("%H:%M:%S%.3fZ").to_string(),
            "email" => self.email(),
            "hostname" => EXAMPLE_HOSTNAME.to_string(),
            "uri" | "url" => EXAMPLE_URI.to_string(),
            "uuid" => EXAMPLE_UUID.to_string(),
            "ipv4" => {
                let octets: Vec<String> = (0..4)
                    .map(|_| self.rng.int_range(0, 256).to_string())
                    .collect();
                octets.join(".")
            }
            "ipv6" => EXAMPLE_IPV6.to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn email(&mut self) -> String {
        format!("user{}@example.com", self.rng.int_range(0, 1000))
    }

    fn uuid(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.bytes16())
            .into_uuid()
            .to_string()
    }

    fn pick_str(&mut self, pool: &[&str]) -> String {
        self.rng.pick(pool).copied().unwrap_or_default().to_string()
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHANUMERIC[self.rng.index(ALPHANUMERIC.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSource;
    use crate::schema::{SchemaDocument, MAX_SIZE_KEYWORD};
    use serde_json::json;
    use std::collections::HashSet;

    fn string_for(schema: Value, property_name: Option<&str>, seed: u64) -> String {
        let document = SchemaDocument::from_value(schema).unwrap();
        let mut rng = RandomSource::seeded(seed);
        let mut parser = Parser::new(&document, &mut rng, false);
        parser.generate_string(document.root(), property_name)
    }

    #[test]
    fn test_enum_values_only() {
        let schema = json!({"type": "string", "enum": ["red", "green", "blue"]});
        let seen: HashSet<String> = (0..200)
            .map(|seed| string_for(schema.clone(), None, seed))
            .collect();

        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|s| ["red", "green", "blue"].contains(&s.as_str())));
    }

    #[test]
    fn test_enum_null_and_non_string_members() {
        assert_eq!(string_for(json!({"type": "string", "enum": [null]}), None, 1), "");
        assert_eq!(string_for(json!({"type": "string", "enum": [42]}), None, 1), "42");
        assert_eq!(string_for(json!({"type": "string", "enum": [true]}), None, 1), "true");
    }

    #[test]
    fn test_enum_beats_heuristics() {
        let schema = json!({"type": "string", "enum": ["fixed"]});
        assert_eq!(string_for(schema, Some("email"), 1), "fixed");
    }

    #[test]
    fn test_email_heuristic() {
        let value = string_for(json!({"type": "string"}), Some("contactEmail"), 5);
        assert!(value.starts_with("user"));
        assert!(value.ends_with("@example.com"));
        let n: u32 = value["user".len()..value.len() - "@example.com".len()].parse().unwrap();
        assert!(n < 1000);
    }

    #[test]
    fn test_name_heuristics() {
        let first = string_for(json!({"type": "string"}), Some("first_name"), 2);
        assert!(FIRST_NAMES.contains(&first.as_str()));

        let last = string_for(json!({"type": "string"}), Some("LastName"), 2);
        assert!(LAST_NAMES.contains(&last.as_str()));

        let full = string_for(json!({"type": "string"}), Some("name"), 2);
        let parts: Vec<&str> = full.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(FIRST_NAMES.contains(&parts[0]));
        assert!(LAST_NAMES.contains(&parts[1]));
    }

    #[test]
    fn test_pool_heuristics() {
        let named = |name: &str| string_for(json!({"type": "string"}), Some(name), 3);

        assert!(CITIES.contains(&named("city").as_str()));
        assert!(COUNTRIES.contains(&named("country").as_str()));
        assert!(COMPANIES.contains(&named("company").as_str()));
        assert!(TITLES.contains(&named("jobTitle").as_str()));
        assert!(DESCRIPTIONS.contains(&named("summary").as_str()));
    }

    #[test]
    fn test_id_heuristic_is_uuid() {
        let value = string_for(json!({"type": "string"}), Some("userId"), 8);
        let parsed = uuid::Uuid::parse_str(&value).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_phone_heuristic_shape() {
        let value = string_for(json!({"type": "string"}), Some("phoneNumber"), 4);
        let parts: Vec<&str> = value.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "+1");
        assert_eq!(parts[3].len(), 4);
    }

    #[test]
    fn test_formats() {
        let s = |format: &str| string_for(json!({"type": "string", "format": format}), None, 6);

        assert!(chrono::DateTime::parse_from_rfc3339(&s("date-time")).is_ok());
        assert!(chrono::NaiveDate::parse_from_str(&s("date"), "%Y-%m-%d").is_ok());
        assert!(s("time").ends_with('Z'));
        assert!(s("email").ends_with("@example.com"));
        assert_eq!(s("hostname"), EXAMPLE_HOSTNAME);
        assert_eq!(s("uri"), EXAMPLE_URI);
        assert_eq!(s("url"), EXAMPLE_URI);
        assert_eq!(s("uuid"), EXAMPLE_UUID);
        assert_eq!(s("ipv6"), EXAMPLE_IPV6);

        let ip = s("ipv4");
        let octets: Vec<u16> = ip.split('.').map(|o| o.parse().unwrap()).collect();
        assert_eq!(octets.len(), 4);
        assert!(octets.iter().all(|o| *o <= 255));
    }

    #[test]
    fn test_ssn_pattern_only() {
        let ssn = json!({"type": "string", "pattern": SSN_PATTERN});
        assert_eq!(string_for(ssn, None, 1), SSN_EXAMPLE);

        let other = json!({
            "type": "string", "pattern": "^[a-z]+$", "minLength": 4, "maxLength": 4
        });
        assert_eq!(string_for(other, None, 1).len(), 4);
    }

    #[test]
    fn test_length_bounds() {
        for seed in 0..100 {
            let schema = json!({"type": "string", "minLength": 3, "maxLength": 6});
            let value = string_for(schema, None, seed);
            assert!((3..=6).contains(&value.len()));
            assert!(value.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_huge_min_length_is_capped() {
        let value = string_for(json!({"type": "string", "minLength": 1e20}), None, 1);
        assert!((MAX_SIZE_KEYWORD..=MAX_SIZE_KEYWORD + 5).contains(&value.len()));
    }

    #[test]
    fn test_default_max_length() {
        for seed in 0..100 {
            let short = string_for(json!({"type": "string"}), None, seed);
            assert!(short.len() <= 10);

            let long = string_for(json!({"type": "string", "minLength": 20}), None, seed);
            assert!((20..=25).contains(&long.len()));
        }
    }
}
