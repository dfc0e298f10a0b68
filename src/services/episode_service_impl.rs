//! `SeaORM` implementation of the `EpisodeService` trait.

use crate::db::Store;
use crate::domain::EpisodeId;
use crate::serializer::{self, EpisodeDetailView, EpisodeView};
use crate::services::episode_service::{EpisodeError, EpisodeService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmEpisodeService {
    store: Store,
}

impl SeaOrmEpisodeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EpisodeService for SeaOrmEpisodeService {
    async fn list_episodes(&self) -> Result<Vec<EpisodeView>, EpisodeError> {
        let episodes = self.store.list_episodes().await?;
        Ok(serializer::episode_list(&episodes))
    }

    async fn get_episode(&self, id: EpisodeId) -> Result<EpisodeDetailView, EpisodeError> {
        let record = self
            .store
            .get_episode_with_appearances(id)
            .await?
            .ok_or_else(|| {
                debug!("Episode {} requested but not found", id);
                EpisodeError::NotFound(id)
            })?;

        Ok(serializer::episode_detail(&record))
    }

    async fn create_episode(
        &self,
        date: String,
        number: i32,
    ) -> Result<EpisodeView, EpisodeError> {
        let episode = self.store.create_episode(date, number).await?;
        Ok(serializer::episode_summary(&episode))
    }

    async fn delete_episode(&self, id: EpisodeId) -> Result<u64, EpisodeError> {
        let removed = self
            .store
            .delete_episode(id)
            .await?
            .ok_or(EpisodeError::NotFound(id))?;

        metrics::counter!("episodes_deleted_total").increment(1);
        Ok(removed)
    }
}
