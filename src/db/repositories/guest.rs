use crate::domain::GuestId;
use crate::entities::{appearances, guests, prelude::*};
use crate::models::{Appearance, Episode, Guest, GuestWithAppearances};
use anyhow::{Result, anyhow};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

pub struct GuestRepository {
    conn: DatabaseConnection,
}

impl GuestRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Guest>> {
        let rows = Guests::find()
            .order_by_asc(guests::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }

    pub async fn get(&self, id: GuestId) -> Result<Option<Guest>> {
        let row = Guests::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Guest::from))
    }

    pub async fn get_with_appearances(&self, id: GuestId) -> Result<Option<GuestWithAppearances>> {
        let Some(guest) = Guests::find_by_id(id.value()).one(&self.conn).await? else {
            return Ok(None);
        };

        let rows = Appearances::find()
            .filter(appearances::Column::GuestId.eq(id.value()))
            .order_by_asc(appearances::Column::Id)
            .find_also_related(Episodes)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .map(|(appearance, episode)| {
                let episode = episode.ok_or_else(|| {
                    anyhow!(
                        "Appearance {} references missing episode {}",
                        appearance.id,
                        appearance.episode_id
                    )
                })?;
                Ok((Appearance::try_from(appearance)?, Episode::from(episode)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(GuestWithAppearances {
            guest: guest.into(),
            appearances,
        }))
    }

    pub async fn create(&self, name: String, occupation: String) -> Result<Guest> {
        let model = guests::ActiveModel {
            name: Set(name),
            occupation: Set(occupation),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!("Created guest {}: {}", model.id, model.name);
        Ok(model.into())
    }

    /// Deletes a guest and every appearance they made in one transaction.
    ///
    /// Returns `None` when the guest does not exist, otherwise the number of
    /// appearances removed along with it.
    pub async fn delete(&self, id: GuestId) -> Result<Option<u64>> {
        let txn = self.conn.begin().await?;

        if Guests::find_by_id(id.value()).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        let removed = Appearances::delete_many()
            .filter(appearances::Column::GuestId.eq(id.value()))
            .exec(&txn)
            .await?
            .rows_affected;

        Guests::delete_by_id(id.value()).exec(&txn).await?;

        txn.commit().await?;

        info!("Deleted guest {} and {} appearance(s)", id, removed);
        Ok(Some(removed))
    }
}
