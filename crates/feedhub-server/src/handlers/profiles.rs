//! Profile handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use feedhub_core::{CreateProfile, Profile, ProfilePatch};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    Ok(Json(state.profiles.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.profiles.get(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateProfile>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.profiles.create(req).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.profiles.update(&id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.profiles.delete(&id).await?))
}
