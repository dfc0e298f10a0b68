//! Domain service for creating appearances.
//!
//! An appearance is only written once its rating has passed validation and
//! both the episode and the guest it points at exist.

use crate::domain::ValidationError;
use crate::serializer::AppearanceView;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppearanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Episode or Guest ID not found.")]
    MissingReference,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for AppearanceError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AppearanceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait AppearanceService: Send + Sync {
    /// Validates the rating, then creates the appearance.
    ///
    /// Ids arrive as raw request integers; one too wide for any row is
    /// treated like any other id that matches nothing.
    ///
    /// # Errors
    ///
    /// - Returns [`AppearanceError::Validation`] if the rating is not an integer in 1..=5
    /// - Returns [`AppearanceError::MissingReference`] if the episode or guest does not exist
    /// - Returns [`AppearanceError::Database`] on connection failures
    async fn create_appearance(
        &self,
        rating: &Value,
        episode_id: i64,
        guest_id: i64,
    ) -> Result<AppearanceView, AppearanceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_error_messages() {
        let err: AppearanceError = ValidationError::RatingOutOfRange.into();
        assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
        assert_eq!(
            AppearanceError::MissingReference.to_string(),
            "Episode or Guest ID not found."
        );
    }
}
