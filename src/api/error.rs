use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::{ErrorResponse, ErrorsResponse};
use crate::services::{AppearanceError, EpisodeError, GuestError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(Vec<String>),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ValidationError(errors) => write!(f, "Validation error: {}", errors.join("; ")),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub fn episode_not_found() -> Self {
        Self::NotFound("Episode not found".to_string())
    }

    #[must_use]
    pub fn guest_not_found() -> Self {
        Self::NotFound("Guest not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
            }
            Self::ValidationError(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "A database error occurred".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "An internal error occurred".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(vec![rejection.body_text()])
    }
}

impl From<EpisodeError> for ApiError {
    fn from(err: EpisodeError) -> Self {
        match err {
            EpisodeError::NotFound(_) => Self::episode_not_found(),
            EpisodeError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<GuestError> for ApiError {
    fn from(err: GuestError) -> Self {
        match err {
            GuestError::NotFound(_) => Self::guest_not_found(),
            GuestError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<AppearanceError> for ApiError {
    fn from(err: AppearanceError) -> Self {
        match err {
            AppearanceError::Validation(_) | AppearanceError::MissingReference => {
                Self::ValidationError(vec![err.to_string()])
            }
            AppearanceError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EpisodeId, ValidationError};

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = EpisodeError::NotFound(EpisodeId::new(1)).into();
        assert!(matches!(&err, ApiError::NotFound(msg) if msg == "Episode not found"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_and_reference_errors_map_to_400() {
        let err: ApiError = AppearanceError::Validation(ValidationError::RatingOutOfRange).into();
        assert!(
            matches!(&err, ApiError::ValidationError(errors) if errors == &["Rating must be between 1 and 5."])
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: ApiError = AppearanceError::MissingReference.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_500() {
        let err: ApiError = GuestError::Database("disk I/O error".to_string()).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
