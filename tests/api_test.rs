//! HTTP adapter tests: routing, status-code mapping, and JSON shapes,
//! exercised through the router without binding a socket.

use anilog::api::{router, SharedService};
use anilog::{MemoryStore, WatchlistService, WatchlistStore};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

async fn app() -> Router {
    let store = Arc::new(MemoryStore::new()) as Arc<dyn WatchlistStore>;
    let service = WatchlistService::load(store).await.unwrap();
    let shared: SharedService = Arc::new(Mutex::new(service));
    router(shared)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_reports_status_options() {
    let app = app().await;
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status_options"][0], "Plan to Watch");
    assert_eq!(body["status_options"][4], "Dropped");
}

#[tokio::test]
async fn test_create_returns_201_with_entry() {
    let app = app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/anime",
            json!({"title": "Naruto", "total_episodes": 220}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "Plan to Watch");
    assert_eq!(body["episodes_watched"], 0);
    assert_eq!(body["rating"], Value::Null);
}

#[tokio::test]
async fn test_duplicate_title_maps_to_400() {
    let app = app().await;
    app.clone()
        .oneshot(json_request("POST", "/anime", json!({"title": "A"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("POST", "/anime", json!({"title": "a"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_unknown_id_maps_to_404() {
    let app = app().await;

    let response = app.clone().oneshot(get("/anime/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/anime/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_applies_fields_and_auto_completes() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/anime",
            json!({"title": "FLCL", "total_episodes": 6}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/anime/1",
            json!({"episodes_watched": 6, "rating": 8.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "Completed");
    assert_eq!(body["episodes_watched"], 6);
    assert_eq!(body["rating"], 8.0);
}

#[tokio::test]
async fn test_patch_invalid_rating_maps_to_400() {
    let app = app().await;
    app.clone()
        .oneshot(json_request("POST", "/anime", json!({"title": "Monster"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PATCH", "/anime/1", json!({"rating": 11.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_status_filter_maps_to_400() {
    let app = app().await;
    let response = app
        .oneshot(get("/anime?status=Rewatching"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/anime",
            json!({"title": "A", "status": "Watching"}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("POST", "/anime", json!({"title": "B"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/anime?status=Watching")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "A");
}

#[tokio::test]
async fn test_delete_returns_204() {
    let app = app().await;
    app.clone()
        .oneshot(json_request("POST", "/anime", json!({"title": "A"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/anime/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/anime")).await.unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_route() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/anime",
            json!({"title": "Attack on Titan"}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("POST", "/anime", json!({"title": "Death Note"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/anime/search/attack")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Attack on Titan");
}

#[tokio::test]
async fn test_stats_route() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/anime",
            json!({"title": "A", "total_episodes": 12}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("PATCH", "/anime/1", json!({"rating": 7.5})))
        .await
        .unwrap();

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["average_rating"], 7.5);
    assert_eq!(body["by_status"]["Plan to Watch"], 1);
    assert_eq!(body["by_status"]["Dropped"], 0);
}
