//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use subspace_server::{
    api::create_router, cache::CacheStore, linalg::Canonicalizer, AppState, ComputeService,
    Config,
};
use tower::ServiceExt;

// == Helper Functions ==

fn create_app(cache: CacheStore) -> Router {
    let service = ComputeService::new(Canonicalizer::default(), cache);
    create_router(AppState::new(service, Config::default()))
}

fn create_test_app() -> Router {
    create_app(CacheStore::new(100, 300))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_compute(app: &Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/compute")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Compute Endpoint Tests ==

#[tokio::test]
async fn test_compute_rank_two_matrix() {
    let app = create_test_app();

    let (status, json) = post_compute(&app, r#"{"matrix":[[1,2,3],[4,5,6],[7,8,9]]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rank"], 2);
    assert_eq!(json["rref"]["pivots"], serde_json::json!([0, 1]));
    assert_eq!(json["null_space"]["dimension"], 1);
    assert_eq!(json["null_space"]["basis"], serde_json::json!([["1", "-2", "1"]]));
    assert_eq!(json["left_null_space"]["basis"], serde_json::json!([["1", "-2", "1"]]));
    assert_eq!(
        json["column_space"]["basis"],
        serde_json::json!([["1", "4", "7"], ["2", "5", "8"]])
    );
    assert_eq!(json["column_space"]["description"], "Subspace of R^3");
    assert_eq!(json["dimension_check"]["valid"], true);
    assert_eq!(json["cached"], false);
}

#[tokio::test]
async fn test_compute_identity_matrix() {
    let app = create_test_app();

    let (status, json) = post_compute(&app, r#"{"matrix":[[1,0,0],[0,1,0],[0,0,1]]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rank"], 3);
    assert_eq!(json["null_space"]["dimension"], 0);
    assert_eq!(json["null_space"]["basis"], serde_json::json!([]));
    assert_eq!(json["left_null_space"]["dimension"], 0);
    assert_eq!(json["row_space"]["dimension"], 3);
}

#[tokio::test]
async fn test_compute_second_request_is_cached() {
    let app = create_test_app();

    let (_, first) = post_compute(&app, r#"{"matrix":[[0.5,1],[2,3]]}"#).await;
    let (_, second) = post_compute(&app, r#"{"matrix":[["1/2","2/2"],[2,3.0]]}"#).await;

    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(first["rref"], second["rref"]);
    assert_eq!(first["matrix"]["data"], serde_json::json!([["1/2", "1"], ["2", "3"]]));

    let (_, stats) = get_json(&app, "/api/cache/stats").await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["current_size"], 1);
}

#[tokio::test]
async fn test_compute_ragged_rows_rejected() {
    let app = create_test_app();

    let (status, json) = post_compute(&app, r#"{"matrix":[[1,2],[3]]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("same number of columns"));

    let (_, stats) = get_json(&app, "/api/cache/stats").await;
    assert_eq!(stats["current_size"], 0);
}

#[tokio::test]
async fn test_compute_non_numeric_rejected() {
    let app = create_test_app();

    let (status, json) = post_compute(&app, r#"{"matrix":[[1,"abc"]]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("row 0, column 1"));
}

#[tokio::test]
async fn test_compute_empty_and_oversized_rejected() {
    let app = create_test_app();

    let (status, _) = post_compute(&app, r#"{"matrix":[]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = post_compute(&app, r#"{"matrix":[[1,2,3,4,5,6]]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("columns"));
}

#[tokio::test]
async fn test_compute_after_ttl_recomputes() {
    let app = create_app(CacheStore::with_ttl(100, Duration::from_millis(150)));
    let body = r#"{"matrix":[[1,1],[1,1]]}"#;

    let (_, first) = post_compute(&app, body).await;
    let (_, second) = post_compute(&app, body).await;
    tokio::time::sleep(Duration::from_millis(250)).await;
    let (_, third) = post_compute(&app, body).await;

    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(third["cached"], false);
}

#[tokio::test]
async fn test_compute_capacity_eviction() {
    let app = create_app(CacheStore::new(2, 300));

    post_compute(&app, r#"{"matrix":[[1]]}"#).await;
    post_compute(&app, r#"{"matrix":[[2]]}"#).await;
    post_compute(&app, r#"{"matrix":[[3]]}"#).await;

    let (_, stats) = get_json(&app, "/api/cache/stats").await;
    assert_eq!(stats["evictions"], 1);
    assert_eq!(stats["current_size"], 2);

    // [[1]] was least recently used and is gone
    let (_, again) = post_compute(&app, r#"{"matrix":[[1]]}"#).await;
    assert_eq!(again["cached"], false);
}

// == Cache Administration Tests ==

#[tokio::test]
async fn test_clear_cache_endpoint() {
    let app = create_test_app();
    post_compute(&app, r#"{"matrix":[[1,2],[3,4]]}"#).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/cache/clear")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get_json(&app, "/api/cache/stats").await;
    assert_eq!(stats["current_size"], 0);
    assert_eq!(stats["misses"], 1, "Counters survive a clear");

    let (_, again) = post_compute(&app, r#"{"matrix":[[1,2],[3,4]]}"#).await;
    assert_eq!(again["cached"], false);
}

#[tokio::test]
async fn test_stats_endpoint_shape() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/cache/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["max_size"], 100);
    assert_eq!(json["ttl_seconds"], 300);
    assert_eq!(json["hit_rate"], 0.0);
    assert_eq!(json["utilization_percent"], 0.0);
}

// == Informational Endpoint Tests ==

#[tokio::test]
async fn test_root_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["environment"], "development");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cache"]["max_size"], 100);
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_examples_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/examples").await;

    assert_eq!(status, StatusCode::OK);
    let examples = json["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 12);
    assert_eq!(examples[0]["matrix"], serde_json::json!([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
}
