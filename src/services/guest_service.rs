//! Domain service for guest operations.

use crate::domain::GuestId;
use crate::serializer::{GuestDetailView, GuestView};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuestError {
    #[error("Guest {0} not found")]
    NotFound(GuestId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for GuestError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for GuestError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait GuestService: Send + Sync {
    /// Lists every guest as a flat projection, without appearances.
    async fn list_guests(&self) -> Result<Vec<GuestView>, GuestError>;

    /// Gets one guest with their appearances and the episode of each.
    async fn get_guest(&self, id: GuestId) -> Result<GuestDetailView, GuestError>;

    async fn create_guest(&self, name: String, occupation: String)
    -> Result<GuestView, GuestError>;

    /// Deletes a guest together with all of their appearances.
    ///
    /// Returns the number of appearances removed.
    async fn delete_guest(&self, id: GuestId) -> Result<u64, GuestError>;
}
