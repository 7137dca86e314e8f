//! Member type handlers. Member types are read-only apart from patching.

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use feedhub_core::{MemberType, MemberTypePatch};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MemberType>>, ApiError> {
    Ok(Json(state.member_types.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberType>, ApiError> {
    Ok(Json(state.member_types.get(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<MemberTypePatch>,
) -> Result<Json<MemberType>, ApiError> {
    Ok(Json(state.member_types.update(&id, patch).await?))
}
