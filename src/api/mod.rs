//! API Module
//!
//! HTTP handlers and routing for the weather cache.
//!
//! # Endpoints
//! - `GET /api/weather?location=...` - Cached weather lookup
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
