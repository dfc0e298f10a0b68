//! `SeaORM` implementation of the `GuestService` trait.

use crate::db::Store;
use crate::domain::GuestId;
use crate::serializer::{self, GuestDetailView, GuestView};
use crate::services::guest_service::{GuestError, GuestService};
use async_trait::async_trait;

pub struct SeaOrmGuestService {
    store: Store,
}

impl SeaOrmGuestService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GuestService for SeaOrmGuestService {
    async fn list_guests(&self) -> Result<Vec<GuestView>, GuestError> {
        let guests = self.store.list_guests().await?;
        Ok(serializer::guest_list(&guests))
    }

    async fn get_guest(&self, id: GuestId) -> Result<GuestDetailView, GuestError> {
        let record = self
            .store
            .get_guest_with_appearances(id)
            .await?
            .ok_or(GuestError::NotFound(id))?;

        Ok(serializer::guest_detail(&record))
    }

    async fn create_guest(
        &self,
        name: String,
        occupation: String,
    ) -> Result<GuestView, GuestError> {
        let guest = self.store.create_guest(name, occupation).await?;
        Ok(serializer::guest_summary(&guest))
    }

    async fn delete_guest(&self, id: GuestId) -> Result<u64, GuestError> {
        self.store
            .delete_guest(id)
            .await?
            .ok_or(GuestError::NotFound(id))
    }
}
