//! `SeaORM` implementation of the `AppearanceService` trait.

use crate::db::Store;
use crate::domain::{EpisodeId, GuestId, Rating};
use crate::models::NewAppearance;
use crate::serializer::{self, AppearanceView};
use crate::services::appearance_service::{AppearanceError, AppearanceService};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub struct SeaOrmAppearanceService {
    store: Store,
}

impl SeaOrmAppearanceService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AppearanceService for SeaOrmAppearanceService {
    async fn create_appearance(
        &self,
        rating: &Value,
        episode_id: i64,
        guest_id: i64,
    ) -> Result<AppearanceView, AppearanceError> {
        let rating = Rating::from_json(rating)?;

        let (Ok(episode_id), Ok(guest_id)) =
            (EpisodeId::try_from(episode_id), GuestId::try_from(guest_id))
        else {
            debug!(
                "Rejected appearance for episode {} / guest {}: id out of range",
                episode_id, guest_id
            );
            return Err(AppearanceError::MissingReference);
        };

        let new = NewAppearance {
            rating,
            episode_id,
            guest_id,
        };

        let Some(record) = self.store.create_appearance(&new).await? else {
            debug!(
                "Rejected appearance for episode {} / guest {}: missing reference",
                episode_id, guest_id
            );
            return Err(AppearanceError::MissingReference);
        };

        metrics::counter!("appearances_created_total").increment(1);
        Ok(serializer::appearance_detail(&record))
    }
}
