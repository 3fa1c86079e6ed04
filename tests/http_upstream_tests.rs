//! Integration Tests for the HTTP upstream client
//!
//! Runs a throwaway axum server on an ephemeral port that plays the weather
//! service, then drives `HttpUpstream` and the cache against it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use weather_cache::{
    models::WeatherInfo,
    upstream::{HttpUpstream, UpstreamError},
    ResilientCache, TtlPolicy, UpstreamClient,
};

// == Fake Weather Service ==

/// Picks a response from the location:
/// `boom` → 500, `empty` → 204, `null` → JSON null, `garbage` → bad JSON,
/// `slow` → sleeps past the client timeout, anything else → weather JSON.
async fn fake_weather(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    let location = params.get("location").cloned().unwrap_or_default();
    match location.as_str() {
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "empty" => StatusCode::NO_CONTENT.into_response(),
        "null" => Json(serde_json::Value::Null).into_response(),
        "garbage" => (StatusCode::OK, "{not json").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(WeatherInfo::new("slow", "Late", 1.0)).into_response()
        }
        _ => Json(serde_json::json!({
            "location": location,
            "description": "Cloudy",
            "temperatureCelsius": 16.5
        }))
        .into_response(),
    }
}

async fn spawn_fake_service() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/weather", get(fake_weather))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn client_for(base_url: &str) -> HttpUpstream {
    HttpUpstream::new(base_url, Duration::from_millis(500)).unwrap()
}

// == Client Mapping Tests ==

#[tokio::test]
async fn test_lookup_success_passes_raw_location() {
    let (base_url, _) = spawn_fake_service().await;
    let client = client_for(&base_url);

    let info = client.lookup(" São Paulo ").await.unwrap().unwrap();

    assert_eq!(info.location, " São Paulo ");
    assert_eq!(info.description, "Cloudy");
    assert_eq!(info.temperature_celsius, 16.5);
}

#[tokio::test]
async fn test_lookup_error_status() {
    let (base_url, _) = spawn_fake_service().await;
    let result = client_for(&base_url).lookup("boom").await;

    assert!(matches!(result, Err(UpstreamError::Status(500))));
}

#[tokio::test]
async fn test_lookup_empty_body_is_none() {
    let (base_url, _) = spawn_fake_service().await;
    let client = client_for(&base_url);

    assert!(client.lookup("empty").await.unwrap().is_none());
    assert!(client.lookup("null").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_malformed_body() {
    let (base_url, _) = spawn_fake_service().await;
    let result = client_for(&base_url).lookup("garbage").await;

    assert!(matches!(result, Err(UpstreamError::Decode(_))));
}

#[tokio::test]
async fn test_lookup_timeout() {
    let (base_url, _) = spawn_fake_service().await;
    let result = client_for(&base_url).lookup("slow").await;

    assert!(matches!(result, Err(UpstreamError::Request(_))));
}

#[tokio::test]
async fn test_lookup_connection_refused() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(&format!("http://{}", addr)).lookup("Paris").await;
    assert!(matches!(result, Err(UpstreamError::Request(_))));
}

// == End-to-End Cache Tests ==

#[tokio::test]
async fn test_cache_over_http_upstream() {
    let (base_url, hits) = spawn_fake_service().await;
    let cache = ResilientCache::new(client_for(&base_url), TtlPolicy::default());

    let first = cache.get(" Paris ").await;
    let second = cache.get("PARIS").await;

    assert_eq!(first, WeatherInfo::new(" Paris ", "Cloudy", 16.5));
    assert_eq!(second, first);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cache_degrades_over_http_upstream() {
    let (base_url, hits) = spawn_fake_service().await;
    let cache = ResilientCache::new(client_for(&base_url), TtlPolicy::default());

    assert_eq!(cache.get("boom").await, WeatherInfo::service_unavailable("boom"));
    assert_eq!(cache.get("empty").await, WeatherInfo::unavailable("empty"));
    assert_eq!(cache.get("Boom").await, WeatherInfo::service_unavailable("boom"));
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let stats = cache.stats().await;
    assert_eq!(stats.upstream_failures, 1);
    assert_eq!(stats.empty_results, 1);
}
