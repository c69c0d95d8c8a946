//! API Handlers
//!
//! HTTP request handlers for each generator endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tokio::task;
use tracing::{debug, info};

use crate::cache::GenerationCache;
use crate::config::Config;
use crate::error::{GeneratorError, Result};
use crate::generator::generate;
use crate::models::{
    ClearResponse, GenerateRequest, HealthResponse, SeedRequest, SeedResponse, StatsResponse,
};
use crate::random::RandomSource;
use crate::schema::SchemaDocument;

/// Application state shared across all handlers.
///
/// Generation takes the random source lock before the cache lock; every
/// other handler takes at most one of them.
#[derive(Clone)]
pub struct AppState {
    /// Shared result cache
    pub cache: Arc<RwLock<GenerationCache>>,
    /// Shared random source; draws are serialized so a fixed seed replays
    pub rng: Arc<Mutex<RandomSource>>,
    /// Strict mode for requests that do not choose one
    pub default_strict: bool,
}

impl AppState {
    /// Creates a new AppState from an explicit cache and random source.
    pub fn new(cache: GenerationCache, rng: RandomSource) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            rng: Arc::new(Mutex::new(rng)),
            default_strict: false,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = GenerationCache::new(config.cache_max_entries, config.cache_ttl);
        let mut state = Self::new(cache, RandomSource::from_seed(config.seed));
        state.default_strict = config.strict;
        state
    }
}

/// Handler for POST /generate
///
/// Generates one value for the posted schema.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Value>> {
    if let Some(error_msg) = req.validate() {
        return Err(GeneratorError::InvalidRequest(error_msg));
    }

    let options = req.options(state.default_strict);
    let document = SchemaDocument::from_value(req.schema)?;

    let strict = options.strict;

    // Generation is CPU-bound; the owned guards travel to the blocking pool.
    let mut rng = state.rng.clone().lock_owned().await;
    let mut cache = state.cache.clone().write_owned().await;
    let value = task::spawn_blocking(move || generate(&document, &options, &mut rng, &mut cache))
        .await
        .map_err(|e| GeneratorError::Internal(format!("generation task failed: {}", e)))??;
    debug!(strict, "Generated value");

    Ok(Json(value))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.write().await.clear();
    info!("Cache cleared: removed {} entries", removed);
    Json(ClearResponse::new(removed))
}

/// Handler for PUT /seed
pub async fn reseed_handler(
    State(state): State<AppState>,
    Json(req): Json<SeedRequest>,
) -> Json<SeedResponse> {
    state.rng.lock().await.reseed(req.seed);
    info!("Random source reseeded with {}", req.seed);
    Json(SeedResponse::reseeded(req.seed))
}

/// Handler for POST /seed/reset
pub async fn reset_seed_handler(State(state): State<AppState>) -> Json<SeedResponse> {
    let mut rng = state.rng.lock().await;
    rng.reset();
    Json(SeedResponse::reset(rng.seed()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
