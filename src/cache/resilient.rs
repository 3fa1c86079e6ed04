//! Resilient Cache Module
//!
//! Read-through cache in front of an [`UpstreamClient`] that never fails a lookup.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::cache::{
    normalize_key, CacheEntry, CacheStats, Clock, EntryStore, Outcome, StatsRecorder,
    SystemClock, TtlPolicy,
};
use crate::models::WeatherInfo;
use crate::upstream::UpstreamClient;

// == Resilient Cache ==
/// Caches upstream lookups by normalized location.
///
/// Answered lookups live for the success TTL, failed ones for the shorter
/// failure TTL. Concurrent misses on the same key are not coalesced: each
/// caller refreshes on its own and the last write wins.
pub struct ResilientCache<C> {
    client: C,
    store: EntryStore,
    policy: TtlPolicy,
    clock: Arc<dyn Clock>,
    stats: StatsRecorder,
}

impl<C: UpstreamClient> ResilientCache<C> {
    // == Constructor ==
    /// Creates a cache over `client` using the wall clock.
    pub fn new(client: C, policy: TtlPolicy) -> Self {
        Self::with_clock(client, policy, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(client: C, policy: TtlPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            store: EntryStore::new(),
            policy,
            clock,
            stats: StatsRecorder::new(),
        }
    }

    // == Get ==
    /// Returns weather for `raw_key`, from cache when fresh, otherwise from upstream.
    ///
    /// A blank key yields [`WeatherInfo::no_location`] without touching the
    /// store or upstream. Upstream failures yield a cached fallback; no error
    /// ever reaches the caller.
    pub async fn get(&self, raw_key: &str) -> WeatherInfo {
        self.get_optional(Some(raw_key)).await
    }

    /// Same as [`get`](Self::get), treating a missing key like a blank one.
    pub async fn get_optional(&self, raw_key: Option<&str>) -> WeatherInfo {
        let Some((raw_key, key)) =
            raw_key.and_then(|raw| normalize_key(raw).map(|key| (raw, key)))
        else {
            self.stats.record_blank_key();
            debug!("No location provided, returning placeholder");
            return WeatherInfo::no_location();
        };

        if let Some(entry) = self.store.get(&key).await {
            if entry.is_fresh(self.clock.now_ms(), self.policy.ttl_for(entry.outcome)) {
                self.stats.record_hit();
                trace!(location = raw_key, "Returning cached weather");
                return entry.value;
            }
        }

        self.stats.record_miss();
        self.refresh(raw_key, key).await
    }

    // == Refresh ==
    /// Asks upstream for `raw_key` and stores the outcome under `key`.
    async fn refresh(&self, raw_key: &str, key: String) -> WeatherInfo {
        info!(location = raw_key, "Requesting weather data from upstream");

        let (value, outcome) = match self.client.lookup(raw_key).await {
            Ok(Some(info)) => (info, Outcome::Success),
            Ok(None) => {
                self.stats.record_empty_result();
                debug!(location = raw_key, "Upstream returned no weather data");
                (WeatherInfo::unavailable(raw_key), Outcome::Success)
            }
            Err(err) => {
                self.stats.record_upstream_failure();
                warn!(location = raw_key, error = %err, "Weather service unavailable");
                (WeatherInfo::service_unavailable(raw_key), Outcome::Failure)
            }
        };

        let entry = CacheEntry::new(value.clone(), self.clock.now_ms(), outcome);
        self.store.put(key, entry).await;
        value
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.store.len().await)
    }

    /// Returns the TTL policy in effect.
    pub fn policy(&self) -> &TtlPolicy {
        &self.policy
    }

    /// Returns a copy of the raw entry for an already-normalized key.
    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.store.get(key).await
    }
}
