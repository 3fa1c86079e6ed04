//! Request DTOs for the weather cache API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query string for the weather lookup (GET /api/weather)
///
/// # Fields
/// - `location`: Free-text location; missing is treated the same as blank
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    /// The raw, non-normalized location
    #[serde(default)]
    pub location: Option<String>,
}
