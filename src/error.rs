//! Error types for the weather cache
//!
//! Upstream failures are surfaced as a single error type; the cache recovers
//! from every variant the same way.

use thiserror::Error;

// == Upstream Error Enum ==
/// Failure of a single upstream lookup.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure, timeout, or unreadable response body
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status code
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Response body was not valid weather JSON
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for upstream lookups.
pub type Result<T> = std::result::Result<T, UpstreamError>;
