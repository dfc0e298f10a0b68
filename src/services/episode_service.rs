//! Domain service for episode operations.
//!
//! This module provides the [`EpisodeService`] trait: listing, detail views
//! with nested appearances, and the cascading delete.

use crate::domain::EpisodeId;
use crate::serializer::{EpisodeDetailView, EpisodeView};
use thiserror::Error;

/// Domain errors for episode operations.
#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("Episode {0} not found")]
    NotFound(EpisodeId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for EpisodeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for EpisodeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for episode operations.
///
/// # Examples
///
/// ```rust,ignore
/// use late_show::domain::EpisodeId;
/// use late_show::services::{EpisodeError, EpisodeService};
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn EpisodeService>) -> Result<(), EpisodeError> {
///     let detail = service.get_episode(EpisodeId::new(1)).await?;
///     println!("{} appearances", detail.appearances.len());
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait EpisodeService: Send + Sync {
    /// Lists every episode as a flat projection, without appearances.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::Database`] on connection failures.
    async fn list_episodes(&self) -> Result<Vec<EpisodeView>, EpisodeError>;

    /// Gets one episode with its appearances and the guest of each.
    ///
    /// # Errors
    ///
    /// - Returns [`EpisodeError::NotFound`] if the episode does not exist
    /// - Returns [`EpisodeError::Database`] on connection failures
    async fn get_episode(&self, id: EpisodeId) -> Result<EpisodeDetailView, EpisodeError>;

    /// Creates an episode.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::Database`] on connection failures.
    async fn create_episode(&self, date: String, number: i32)
    -> Result<EpisodeView, EpisodeError>;

    /// Deletes an episode together with all of its appearances.
    ///
    /// Returns the number of appearances removed.
    ///
    /// # Errors
    ///
    /// - Returns [`EpisodeError::NotFound`] if the episode does not exist
    /// - Returns [`EpisodeError::Database`] on connection failures
    async fn delete_episode(&self, id: EpisodeId) -> Result<u64, EpisodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_error_display() {
        let err = EpisodeError::NotFound(EpisodeId::new(999));
        assert_eq!(err.to_string(), "Episode 999 not found");
    }

    #[test]
    fn db_errors_convert_to_database_variant() {
        let err: EpisodeError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, EpisodeError::Database(_)));
    }
}
