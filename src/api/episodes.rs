use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::domain::EpisodeId;
use crate::serializer::{EpisodeDetailView, EpisodeView};

/// An id that is not an integer, or is too wide for any row, names no episode.
fn episode_id(path: Result<Path<i64>, PathRejection>) -> Result<EpisodeId, ApiError> {
    path.ok()
        .and_then(|Path(id)| EpisodeId::try_from(id).ok())
        .ok_or_else(ApiError::episode_not_found)
}

pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EpisodeView>>, ApiError> {
    let episodes = state.episode_service.list_episodes().await?;
    Ok(Json(episodes))
}

pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<EpisodeDetailView>, ApiError> {
    let episode = state.episode_service.get_episode(episode_id(id)?).await?;
    Ok(Json(episode))
}

pub async fn delete_episode(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    state
        .episode_service
        .delete_episode(episode_id(id)?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
