//! Payload, request, and response models
//!
//! This module defines the weather payload and the DTOs used for
//! serializing/deserializing HTTP requests and responses.

pub mod requests;
pub mod responses;
pub mod weather;

// Re-export commonly used types
pub use requests::WeatherQuery;
pub use responses::{HealthResponse, StatsResponse};
pub use weather::WeatherInfo;
