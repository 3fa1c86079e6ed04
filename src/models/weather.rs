//! Weather payload shared by the upstream client, the cache, and the API.

use serde::{Deserialize, Serialize};

/// Location label used when no location was supplied
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Description for the "no location provided" placeholder
pub const NO_LOCATION_DESCRIPTION: &str = "No address provided";

/// Description used when upstream answered without data
pub const UNAVAILABLE_DESCRIPTION: &str = "Unavailable";

/// Description used when upstream could not be reached
pub const SERVICE_UNAVAILABLE_DESCRIPTION: &str = "Weather service unavailable";

// == Weather Info ==
/// Current conditions for a location.
///
/// Degraded results carry the same shape as real ones; they are told apart
/// only by their `description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherInfo {
    /// Location label
    pub location: String,
    /// Free-text conditions
    pub description: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
}

impl WeatherInfo {
    /// Creates a new WeatherInfo
    pub fn new(
        location: impl Into<String>,
        description: impl Into<String>,
        temperature_celsius: f64,
    ) -> Self {
        Self {
            location: location.into(),
            description: description.into(),
            temperature_celsius,
        }
    }

    /// Placeholder returned for a missing or blank location.
    pub fn no_location() -> Self {
        Self::new(UNKNOWN_LOCATION, NO_LOCATION_DESCRIPTION, 0.0)
    }

    /// Placeholder for a location the upstream returned no data for.
    pub fn unavailable(location: impl Into<String>) -> Self {
        Self::new(location, UNAVAILABLE_DESCRIPTION, 0.0)
    }

    /// Fallback for a location whose lookup failed.
    pub fn service_unavailable(location: impl Into<String>) -> Self {
        Self::new(location, SERVICE_UNAVAILABLE_DESCRIPTION, 0.0)
    }

    /// Returns true if this value is a synthesized fallback rather than upstream data.
    pub fn is_degraded(&self) -> bool {
        self.description == UNAVAILABLE_DESCRIPTION
            || self.description == SERVICE_UNAVAILABLE_DESCRIPTION
            || self.description == NO_LOCATION_DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let info = WeatherInfo::new("Paris", "Cloudy", 16.5);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["location"], "Paris");
        assert_eq!(json["description"], "Cloudy");
        assert_eq!(json["temperatureCelsius"], 16.5);
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let info: WeatherInfo = serde_json::from_str(r#"{"location":"Oslo"}"#).unwrap();
        assert_eq!(info.location, "Oslo");
        assert_eq!(info.description, "");
        assert_eq!(info.temperature_celsius, 0.0);
    }

    #[test]
    fn test_placeholders() {
        let none = WeatherInfo::no_location();
        assert_eq!(none.location, "Unknown");
        assert_eq!(none.description, "No address provided");
        assert!(none.is_degraded());

        let empty = WeatherInfo::unavailable(" Paris ");
        assert_eq!(empty.location, " Paris ");
        assert_eq!(empty.description, "Unavailable");
        assert!(empty.is_degraded());

        let failed = WeatherInfo::service_unavailable("paris");
        assert_eq!(failed.description, "Weather service unavailable");
        assert_eq!(failed.temperature_celsius, 0.0);
        assert!(failed.is_degraded());

        assert!(!WeatherInfo::new("Paris", "Cloudy", 16.5).is_degraded());
    }
}
