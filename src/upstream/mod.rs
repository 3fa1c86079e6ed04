//! Upstream Module
//!
//! The boundary to the external weather provider. Implementations perform one
//! lookup per call with no caching or retries.

mod http;

use std::future::Future;
use std::sync::Arc;

pub use crate::error::{Result, UpstreamError};
pub use http::{HttpUpstream, WEATHER_PATH};

use crate::models::WeatherInfo;

// == Upstream Client Trait ==
/// A single lookup against the weather provider.
///
/// `Ok(None)` means the provider answered but had no data for the location.
/// Every other problem is an [`UpstreamError`].
pub trait UpstreamClient: Send + Sync + 'static {
    /// Looks up the raw, non-normalized location.
    fn lookup(&self, raw_key: &str) -> impl Future<Output = Result<Option<WeatherInfo>>> + Send;
}

impl<C: UpstreamClient> UpstreamClient for Arc<C> {
    fn lookup(&self, raw_key: &str) -> impl Future<Output = Result<Option<WeatherInfo>>> + Send {
        (**self).lookup(raw_key)
    }
}
