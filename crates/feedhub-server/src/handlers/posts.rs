//! Post handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use feedhub_core::{CreatePost, Post, PostPatch};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.posts.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.get(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePost>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.create(req).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.update(&id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.delete(&id).await?))
}
