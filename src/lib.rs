//! Weather Cache - A resilient read-through cache for weather lookups
//!
//! Fronts an unreliable weather service, caching successful lookups for a long
//! TTL and degraded fallbacks for a short one, so callers always get a value.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use cache::{ResilientCache, TtlPolicy};
pub use config::Config;
pub use upstream::{HttpUpstream, UpstreamClient};
