use crate::domain::{EpisodeId, GuestId};
use crate::entities::{appearances, prelude::*};
use crate::models::{Appearance, AppearanceWithParents, NewAppearance};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use tracing::info;

pub struct AppearanceRepository {
    conn: DatabaseConnection,
}

impl AppearanceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts an appearance after confirming both parents exist.
    ///
    /// Returns `None`, with nothing written, when the episode or the guest is
    /// missing. A foreign key violation from the database is reported the
    /// same way.
    pub async fn create(&self, new: &NewAppearance) -> Result<Option<AppearanceWithParents>> {
        let txn = self.conn.begin().await?;

        let episode = Episodes::find_by_id(new.episode_id.value())
            .one(&txn)
            .await?;
        let guest = Guests::find_by_id(new.guest_id.value()).one(&txn).await?;

        let (Some(episode), Some(guest)) = (episode, guest) else {
            txn.rollback().await?;
            return Ok(None);
        };

        let inserted = appearances::ActiveModel {
            rating: Set(new.rating.value()),
            episode_id: Set(new.episode_id.value()),
            guest_id: Set(new.guest_id.value()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        let model = match inserted {
            Ok(model) => model,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                txn.rollback().await?;
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        info!(
            "Created appearance {} (episode {}, guest {}, rating {})",
            model.id, model.episode_id, model.guest_id, model.rating
        );

        Ok(Some(AppearanceWithParents {
            appearance: Appearance::try_from(model)?,
            episode: episode.into(),
            guest: guest.into(),
        }))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Appearances::find().count(&self.conn).await?)
    }

    pub async fn count_for_episode(&self, id: EpisodeId) -> Result<u64> {
        Ok(Appearances::find()
            .filter(appearances::Column::EpisodeId.eq(id.value()))
            .count(&self.conn)
            .await?)
    }

    pub async fn count_for_guest(&self, id: GuestId) -> Result<u64> {
        Ok(Appearances::find()
            .filter(appearances::Column::GuestId.eq(id.value()))
            .count(&self.conn)
            .await?)
    }
}
