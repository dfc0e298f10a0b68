use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, AppState, CreateAppearanceRequest};
use crate::serializer::AppearanceView;

pub async fn create_appearance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAppearanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppearanceView>), ApiError> {
    let Json(payload) = payload?;

    let appearance = state
        .appearance_service
        .create_appearance(&payload.rating, payload.episode_id, payload.guest_id)
        .await?;

    Ok((StatusCode::CREATED, Json(appearance)))
}
