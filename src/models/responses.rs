//! Response DTOs for the generator API
//!
//! Defines the structure of outgoing HTTP response bodies. Successful
//! `POST /generate` calls return the generated JSON value itself.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for `GET /cache/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached value(s)", removed),
            removed,
        }
    }
}

/// Response body for `PUT /seed` and `POST /seed/reset`
#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse {
    pub message: String,
    /// Seed the random source now replays from
    pub seed: u64,
}

impl SeedResponse {
    pub fn reseeded(seed: u64) -> Self {
        Self {
            message: format!("Random source reseeded with {}", seed),
            seed,
        }
    }

    pub fn reset(seed: u64) -> Self {
        Self {
            message: "Random source reset".to_string(),
            seed,
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
