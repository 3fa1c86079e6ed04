//! TTL Policy Module
//!
//! Maps an entry's outcome to the time it stays fresh.

use std::time::Duration;

use crate::cache::Outcome;
use crate::config::Config;

/// Smallest TTL accepted for failed lookups
pub const MIN_FAILURE_TTL: Duration = Duration::from_secs(1);

// == TTL Policy ==
/// Long TTL for answered lookups, short TTL for failed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    success: Duration,
    failure: Duration,
}

impl TtlPolicy {
    /// Creates a policy. `failure` is raised to [`MIN_FAILURE_TTL`] if shorter.
    pub fn new(success: Duration, failure: Duration) -> Self {
        Self {
            success,
            failure: failure.max(MIN_FAILURE_TTL),
        }
    }

    /// Creates a policy from configured second values.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_secs(config.success_ttl),
            Duration::from_secs(config.failure_ttl),
        )
    }

    /// Returns the TTL that applies to an entry with the given outcome.
    pub fn ttl_for(&self, outcome: Outcome) -> Duration {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }

    pub fn success_ttl(&self) -> Duration {
        self.success
    }

    pub fn failure_ttl(&self) -> Duration {
        self.failure
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(300), Duration::from_secs(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for(Outcome::Success), Duration::from_secs(300));
        assert_eq!(policy.ttl_for(Outcome::Failure), Duration::from_secs(30));
    }

    #[test]
    fn test_failure_ttl_minimum() {
        let policy = TtlPolicy::new(Duration::from_secs(60), Duration::ZERO);
        assert_eq!(policy.failure_ttl(), MIN_FAILURE_TTL);
        assert_eq!(policy.success_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_policy_from_config() {
        let config = Config {
            success_ttl: 120,
            failure_ttl: 5,
            ..Config::default()
        };
        let policy = TtlPolicy::from_config(&config);
        assert_eq!(policy.success_ttl(), Duration::from_secs(120));
        assert_eq!(policy.failure_ttl(), Duration::from_secs(5));
    }
}
