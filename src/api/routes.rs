//! HTTP routes for the watchlist API.
//!
//! Thin adapter over the engine: handlers parse the request, take the
//! service lock for the whole operation, and translate domain errors into
//! status codes. No business rules live here.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::api::error::ApiError;
use crate::modules::watchlist::application::{WatchlistService, WatchlistStats};
use crate::modules::watchlist::domain::{AnimeEntry, WatchStatus};
use crate::shared::errors::AppError;

/// The engine shared across request handlers. The mutex serializes every
/// validate-mutate-persist span; the engine itself assumes a single
/// mutator.
pub type SharedService = Arc<Mutex<WatchlistService>>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnimeRequest {
    pub title: String,
    #[serde(default)]
    pub total_episodes: i32,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAnimeRequest {
    pub status: Option<String>,
    pub episodes_watched: Option<i32>,
    pub rating: Option<f32>,
}

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(root_info))
        .route("/anime", get(list_anime).post(create_anime))
        .route("/anime/search/:query", get(search_anime))
        .route(
            "/anime/:id",
            get(get_anime).patch(update_anime).delete(delete_anime),
        )
        .route("/stats", get(get_stats))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn root_info() -> Json<Value> {
    Json(json!({
        "message": "Anime Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "status_options": WatchStatus::ALL
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>(),
    }))
}

async fn list_anime(
    State(service): State<SharedService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AnimeEntry>>, ApiError> {
    let service = service.lock().await;
    let entries = match query.status {
        Some(raw) => service.list_by_status(raw.parse::<WatchStatus>()?),
        None => service.list_all(),
    };
    Ok(Json(entries))
}

async fn get_anime(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Result<Json<AnimeEntry>, ApiError> {
    let service = service.lock().await;
    let entry = service
        .get_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))?;
    Ok(Json(entry))
}

async fn create_anime(
    State(service): State<SharedService>,
    Json(request): Json<CreateAnimeRequest>,
) -> Result<(StatusCode, Json<AnimeEntry>), ApiError> {
    let status = match request.status {
        Some(raw) => raw.parse::<WatchStatus>()?,
        None => WatchStatus::default(),
    };

    let mut service = service.lock().await;
    let entry = service
        .add(&request.title, request.total_episodes, status)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_anime(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateAnimeRequest>,
) -> Result<Json<AnimeEntry>, ApiError> {
    let mut service = service.lock().await;

    // Provided fields apply in a fixed order: status, then progress, then
    // rating. Progress can still flip the status to Completed afterwards.
    let mut entry = service
        .get_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))?;

    if let Some(raw) = request.status {
        entry = service.update_status(id, raw.parse::<WatchStatus>()?).await?;
    }
    if let Some(episodes) = request.episodes_watched {
        entry = service.update_episodes(id, episodes).await?;
    }
    if let Some(rating) = request.rating {
        entry = service.rate(id, rating).await?;
    }

    Ok(Json(entry))
}

async fn delete_anime(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let mut service = service.lock().await;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn search_anime(
    State(service): State<SharedService>,
    Path(query): Path<String>,
) -> Json<Vec<AnimeEntry>> {
    let service = service.lock().await;
    Json(service.search(&query))
}

async fn get_stats(State(service): State<SharedService>) -> Json<WatchlistStats> {
    let service = service.lock().await;
    Json(service.statistics())
}
