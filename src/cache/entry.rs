//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their outcome class.

use std::time::Duration;

use crate::models::WeatherInfo;

// == Outcome ==
/// How the cached value was obtained; selects which TTL applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Upstream answered, with data or with an explicit empty result
    Success,
    /// Upstream failed and the value is a fallback
    Failure,
}

// == Cache Entry ==
/// A single cached lookup result.
///
/// Entries are immutable once written; a stale entry is replaced, never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The cached value (upstream data or fallback)
    pub value: WeatherInfo,
    /// Write timestamp (Unix milliseconds)
    pub cached_at: u64,
    /// Outcome class fixed at write time
    pub outcome: Outcome,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry written at `cached_at`.
    pub fn new(value: WeatherInfo, cached_at: u64, outcome: Outcome) -> Self {
        Self {
            value,
            cached_at,
            outcome,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still live at `now_ms` under `ttl`.
    ///
    /// Boundary condition: the entry expires exactly at `cached_at + ttl`.
    /// At that instant it is no longer fresh.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        now_ms < self.expires_at(ttl)
    }

    // == Expires At ==
    /// Returns the Unix millisecond timestamp at which the entry goes stale.
    pub fn expires_at(&self, ttl: Duration) -> u64 {
        self.cached_at.saturating_add(ttl.as_millis() as u64)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(cached_at: u64, outcome: Outcome) -> CacheEntry {
        CacheEntry::new(WeatherInfo::new("Paris", "Cloudy", 16.5), cached_at, outcome)
    }

    #[test]
    fn test_entry_fresh_within_ttl() {
        let entry = entry_at(10_000, Outcome::Success);
        let ttl = Duration::from_secs(300);

        assert!(entry.is_fresh(10_000, ttl));
        assert!(entry.is_fresh(10_000 + 299_999, ttl));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = entry_at(10_000, Outcome::Failure);
        let ttl = Duration::from_secs(30);

        assert_eq!(entry.expires_at(ttl), 40_000);
        assert!(!entry.is_fresh(40_000, ttl), "Entry should be stale at boundary");
        assert!(!entry.is_fresh(40_001, ttl));
    }

    #[test]
    fn test_expires_at_saturates() {
        let entry = entry_at(u64::MAX - 5, Outcome::Success);
        assert_eq!(entry.expires_at(Duration::from_secs(1)), u64::MAX);
    }
}
