use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::domain::GuestId;
use crate::serializer::{GuestDetailView, GuestView};

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestView>>, ApiError> {
    let guests = state.guest_service.list_guests().await?;
    Ok(Json(guests))
}

pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GuestDetailView>, ApiError> {
    let id = id
        .ok()
        .and_then(|Path(id)| GuestId::try_from(id).ok())
        .ok_or_else(ApiError::guest_not_found)?;

    let guest = state.guest_service.get_guest(id).await?;
    Ok(Json(guest))
}
