//! Cache Module
//!
//! Provides the resilient read-through cache with per-outcome TTLs.

mod clock;
mod entry;
mod policy;
mod resilient;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, Outcome};
pub use policy::{TtlPolicy, MIN_FAILURE_TTL};
pub use resilient::ResilientCache;
pub use stats::{CacheStats, StatsRecorder};
pub use store::EntryStore;

// == Key Normalization ==
/// Canonicalizes a raw location into a cache key (trimmed, lowercased).
///
/// Returns `None` for an empty or whitespace-only key, which bypasses the cache.
pub fn normalize_key(raw_key: &str) -> Option<String> {
    let trimmed = raw_key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
