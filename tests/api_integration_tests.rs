//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint. Upstream base
//! URLs point at a closed local port so no test ever leaves the machine;
//! everything exercised here is validation, routing and cache behavior.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use skycast::{api::create_router, AppState, Config};
use tower::ServiceExt;

// == Helper Functions ==

fn offline_config() -> Config {
    Config {
        openweather_base_url: "http://127.0.0.1:1/onecall".to_string(),
        nominatim_base_url: "http://127.0.0.1:1".to_string(),
        gemini_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    }
}

fn create_test_app() -> Router {
    create_router(AppState::from_config(&offline_config()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_starts_at_zero() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["forecast"]["hits"].as_u64().unwrap(), 0);
    assert_eq!(json["forecast"]["total_entries"].as_u64().unwrap(), 0);
    assert_eq!(json["summary"]["misses"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_stats_endpoint_counts_forecast_misses() {
    let state = AppState::from_config(&offline_config());
    let app = create_router(state.clone());

    // A valid request that misses the cache and then fails upstream
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/forecast",
            r#"{"lat": 52.52, "lon": 13.405, "units": "metric"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let stats_response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(stats_response.into_body()).await;
    assert_eq!(json["forecast"]["misses"].as_u64().unwrap(), 1);
    // The failed lookup must not have populated the cache
    assert_eq!(json["forecast"]["total_entries"].as_u64().unwrap(), 0);
}

// == Forecast Endpoint Tests ==

#[tokio::test]
async fn test_forecast_endpoint_rejects_out_of_range_latitude() {
    let app = create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/forecast",
            r#"{"lat": 90.5, "lon": 13.405, "units": "metric"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"].as_str().unwrap(), "lat");
}

#[tokio::test]
async fn test_forecast_endpoint_rejects_both_bad_coordinates() {
    let app = create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/forecast",
            r#"{"lat": -91, "lon": 181, "units": "imperial"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_forecast_endpoint_rejects_unknown_units() {
    let app = create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/forecast",
            r#"{"lat": 52.52, "lon": 13.405, "units": "kelvin"}"#,
        ))
        .await
        .unwrap();

    // Rejected by body deserialization before the handler runs
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_forecast_endpoint_upstream_failure_is_bad_gateway() {
    let app = create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/forecast",
            r#"{"lat": 52.52, "lon": 13.405, "units": "metric"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

// == Summary Endpoint Tests ==

#[tokio::test]
async fn test_summary_endpoint_rejects_bad_coordinates() {
    let app = create_test_app();

    let response = app
        .oneshot(json_post("/api/summary", r#"{"lat": 120, "lon": 0}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Geosearch Endpoint Tests ==

#[tokio::test]
async fn test_geosearch_endpoint_rejects_empty_query() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/geosearch?q=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["errors"][0]["field"].as_str().unwrap(), "q");
}

#[tokio::test]
async fn test_geosearch_endpoint_rejects_overlong_query() {
    let app = create_test_app();
    let query = "x".repeat(256);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/geosearch?q={}", query))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reverse_geosearch_endpoint_rejects_missing_params() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/geosearch/reverse")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn test_reverse_geosearch_endpoint_rejects_out_of_range() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/geosearch/reverse?lat=52.52&lon=-200")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["errors"][0]["field"].as_str().unwrap(), "lon");
}
