//! Cache Entry Module
//!
//! Defines the structure for individual cached generation results with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A generated value with its bookkeeping timestamps.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The generated value
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Last hit timestamp (Unix milliseconds)
    pub last_accessed: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// # Arguments
    /// * `value` - The generated value to store
    /// * `ttl_seconds` - Optional TTL in seconds
    pub fn new(value: Value, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now + (ttl * 1000));

        Self {
            value,
            created_at: now,
            last_accessed: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Touch ==
    /// Records a hit. Expiry is measured from insertion and is not extended.
    pub fn touch(&mut self) {
        self.last_accessed = current_timestamp_ms();
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(json!({"id": 1}), None);

        assert_eq!(entry.value, json!({"id": 1}));
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(json!("value"), Some(1));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiry_measured_from_insertion() {
        let entry = CacheEntry::new(json!(true), Some(10));

        assert_eq!(entry.expires_at, Some(entry.created_at + 10_000));
    }

    #[test]
    fn test_touch_updates_last_accessed_only() {
        let mut entry = CacheEntry::new(json!(1), Some(10));
        let expires = entry.expires_at;

        sleep(Duration::from_millis(5));
        entry.touch();

        assert!(entry.last_accessed >= entry.created_at);
        assert_eq!(entry.expires_at, expires);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: json!(null),
            created_at: now,
            last_accessed: now,
            expires_at: Some(now), // Expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
