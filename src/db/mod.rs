use crate::domain::{EpisodeId, GuestId};
use crate::entities::prelude::*;
use crate::models::{
    AppearanceWithParents, Episode, EpisodeWithAppearances, Guest, GuestWithAppearances,
    NewAppearance,
};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .with_context(|| format!("Failed to connect to database: {db_url}"))?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn episode_repo(&self) -> repositories::episode::EpisodeRepository {
        repositories::episode::EpisodeRepository::new(self.conn.clone())
    }

    fn guest_repo(&self) -> repositories::guest::GuestRepository {
        repositories::guest::GuestRepository::new(self.conn.clone())
    }

    fn appearance_repo(&self) -> repositories::appearance::AppearanceRepository {
        repositories::appearance::AppearanceRepository::new(self.conn.clone())
    }

    pub async fn list_episodes(&self) -> Result<Vec<Episode>> {
        self.episode_repo().list().await
    }

    pub async fn get_episode_with_appearances(
        &self,
        id: EpisodeId,
    ) -> Result<Option<EpisodeWithAppearances>> {
        self.episode_repo().get_with_appearances(id).await
    }

    pub async fn create_episode(&self, date: impl Into<String>, number: i32) -> Result<Episode> {
        self.episode_repo().create(date.into(), number).await
    }

    pub async fn delete_episode(&self, id: EpisodeId) -> Result<Option<u64>> {
        self.episode_repo().delete(id).await
    }

    pub async fn list_guests(&self) -> Result<Vec<Guest>> {
        self.guest_repo().list().await
    }

    pub async fn get_guest(&self, id: GuestId) -> Result<Option<Guest>> {
        self.guest_repo().get(id).await
    }

    pub async fn get_guest_with_appearances(
        &self,
        id: GuestId,
    ) -> Result<Option<GuestWithAppearances>> {
        self.guest_repo().get_with_appearances(id).await
    }

    pub async fn create_guest(
        &self,
        name: impl Into<String>,
        occupation: impl Into<String>,
    ) -> Result<Guest> {
        self.guest_repo()
            .create(name.into(), occupation.into())
            .await
    }

    pub async fn delete_guest(&self, id: GuestId) -> Result<Option<u64>> {
        self.guest_repo().delete(id).await
    }

    pub async fn create_appearance(
        &self,
        new: &NewAppearance,
    ) -> Result<Option<AppearanceWithParents>> {
        self.appearance_repo().create(new).await
    }

    pub async fn count_appearances(&self) -> Result<u64> {
        self.appearance_repo().count().await
    }

    pub async fn count_appearances_for_episode(&self, id: EpisodeId) -> Result<u64> {
        self.appearance_repo().count_for_episode(id).await
    }

    pub async fn count_appearances_for_guest(&self, id: GuestId) -> Result<u64> {
        self.appearance_repo().count_for_guest(id).await
    }
}

/// Empties all three tables, children first, on whatever connection or
/// transaction it is handed.
pub async fn clear_tables<C: ConnectionTrait>(conn: &C) -> Result<()> {
    Appearances::delete_many().exec(conn).await?;
    Episodes::delete_many().exec(conn).await?;
    Guests::delete_many().exec(conn).await?;

    debug!("Cleared episodes, guests and appearances");
    Ok(())
}
