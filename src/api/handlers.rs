//! API Handlers
//!
//! HTTP request handlers for each weather cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::{ResilientCache, TtlPolicy};
use crate::config::Config;
use crate::models::{HealthResponse, StatsResponse, WeatherInfo, WeatherQuery};
use crate::upstream::{HttpUpstream, Result, UpstreamClient};

/// Application state shared across all handlers.
///
/// Holds the one cache instance built at startup.
pub struct AppState<C> {
    /// Shared resilient cache
    pub cache: Arc<ResilientCache<C>>,
}

// Manual impl: cloning the state never requires cloning the client.
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: UpstreamClient> AppState<C> {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ResilientCache<C>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}

impl AppState<HttpUpstream> {
    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP upstream client and a cache using the configured TTLs.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpUpstream::from_config(config)?;
        let cache = ResilientCache::new(client, TtlPolicy::from_config(config));
        Ok(Self::new(cache))
    }
}

/// Handler for GET /api/weather?location=...
///
/// Always answers 200; degraded results are told apart by their content.
pub async fn weather_handler<C: UpstreamClient>(
    State(state): State<AppState<C>>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherInfo> {
    Json(state.cache.get_optional(query.location.as_deref()).await)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler<C: UpstreamClient>(
    State(state): State<AppState<C>>,
) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
