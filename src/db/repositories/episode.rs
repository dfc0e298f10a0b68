use crate::domain::EpisodeId;
use crate::entities::{appearances, episodes, prelude::*};
use crate::models::{Appearance, Episode, EpisodeWithAppearances, Guest};
use anyhow::{Result, anyhow};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

pub struct EpisodeRepository {
    conn: DatabaseConnection,
}

impl EpisodeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Episode>> {
        let rows = Episodes::find()
            .order_by_asc(episodes::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Episode::from).collect())
    }

    pub async fn get_with_appearances(
        &self,
        id: EpisodeId,
    ) -> Result<Option<EpisodeWithAppearances>> {
        let Some(episode) = Episodes::find_by_id(id.value()).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = Appearances::find()
            .filter(appearances::Column::EpisodeId.eq(id.value()))
            .order_by_asc(appearances::Column::Id)
            .find_also_related(Guests)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .map(|(appearance, guest)| {
                let guest = guest.ok_or_else(|| {
                    anyhow!(
                        "Appearance {} references missing guest {}",
                        appearance.id,
                        appearance.guest_id
                    )
                })?;
                Ok((Appearance::try_from(appearance)?, Guest::from(guest)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(EpisodeWithAppearances {
            episode: episode.into(),
            appearances,
        }))
    }

    pub async fn create(&self, date: String, number: i32) -> Result<Episode> {
        let model = episodes::ActiveModel {
            date: Set(date),
            number: Set(number),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!("Created episode {} (number {})", model.id, model.number);
        Ok(model.into())
    }

    /// Deletes an episode and every appearance on it in one transaction.
    ///
    /// Returns `None` when the episode does not exist, otherwise the number of
    /// appearances removed along with it.
    pub async fn delete(&self, id: EpisodeId) -> Result<Option<u64>> {
        let txn = self.conn.begin().await?;

        if Episodes::find_by_id(id.value()).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        let removed = Appearances::delete_many()
            .filter(appearances::Column::EpisodeId.eq(id.value()))
            .exec(&txn)
            .await?
            .rows_affected;

        Episodes::delete_by_id(id.value()).exec(&txn).await?;

        txn.commit().await?;

        info!("Deleted episode {} and {} appearance(s)", id, removed);
        Ok(Some(removed))
    }
}
