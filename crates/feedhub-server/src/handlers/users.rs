//! User handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use feedhub_core::{CreateUser, SubscriptionRequest, User, UserPatch};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.create(req).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(&id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.delete(&id).await?))
}

/// `POST /users/:id/subscribeTo` - the body's user starts following `:id`
pub async fn subscribe_to(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubscriptionRequest>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.subscribe(&id, &req.user_id).await?))
}

/// `POST /users/:id/unsubscribeFrom` - the body's user stops following `:id`
pub async fn unsubscribe_from(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubscriptionRequest>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.unsubscribe(&id, &req.user_id).await?))
}
