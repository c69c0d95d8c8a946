//! Cache Module
//!
//! Memoizes top-level generation results with TTL expiration and LRU eviction.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{cache_key, canonical_json};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::GenerationCache;
