//! Fixture data for a fresh database.

use anyhow::{Result, anyhow};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::info;

use crate::db::{self, Store};
use crate::domain::{EpisodeId, GuestId};
use crate::entities::{appearances, episodes, guests};
use crate::models::NewAppearance;

/// Rows to load. Appearances point into `episodes` and `guests` by index.
#[derive(Debug, Clone, Copy)]
pub struct Fixtures<'a> {
    pub episodes: &'a [(&'a str, i32)],
    pub guests: &'a [(&'a str, &'a str)],
    /// (rating, index into `episodes`, index into `guests`)
    pub appearances: &'a [(i64, usize, usize)],
}

pub const LATE_SHOW: Fixtures<'static> = Fixtures {
    episodes: &[("1/11/99", 1), ("1/12/99", 2), ("1/13/99", 3)],
    guests: &[
        ("Michael J. Fox", "actor"),
        ("Sandra Bernhard", "Comedian"),
        ("Tracey Ullman", "television actress"),
        ("Will Smith", "rapper and actor"),
    ],
    appearances: &[
        (4, 0, 0),
        (5, 0, 1),
        (3, 1, 2),
        (5, 1, 3),
        (1, 2, 0),
        (4, 2, 2),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub episodes: usize,
    pub guests: usize,
    pub appearances: usize,
}

/// Replaces the contents of every table with [`LATE_SHOW`].
pub async fn seed(store: &Store) -> Result<SeedSummary> {
    seed_with(store, &LATE_SHOW).await
}

/// Replaces the contents of every table with `fixtures`.
///
/// Clearing and loading share one transaction: if any row is rejected the
/// database keeps its previous contents.
pub async fn seed_with(store: &Store, fixtures: &Fixtures<'_>) -> Result<SeedSummary> {
    let txn = store.conn.begin().await?;

    db::clear_tables(&txn).await?;

    let mut episode_ids = Vec::with_capacity(fixtures.episodes.len());
    for &(date, number) in fixtures.episodes {
        let model = episodes::ActiveModel {
            date: Set(date.to_string()),
            number: Set(number),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        episode_ids.push(EpisodeId::new(model.id));
    }

    let mut guest_ids = Vec::with_capacity(fixtures.guests.len());
    for &(name, occupation) in fixtures.guests {
        let model = guests::ActiveModel {
            name: Set(name.to_string()),
            occupation: Set(occupation.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        guest_ids.push(GuestId::new(model.id));
    }

    for &(rating, episode, guest) in fixtures.appearances {
        let episode_id = *episode_ids
            .get(episode)
            .ok_or_else(|| anyhow!("Fixture appearance points at missing episode #{episode}"))?;
        let guest_id = *guest_ids
            .get(guest)
            .ok_or_else(|| anyhow!("Fixture appearance points at missing guest #{guest}"))?;

        let new = NewAppearance::new(rating, episode_id, guest_id)?;
        appearances::ActiveModel {
            rating: Set(new.rating.value()),
            episode_id: Set(new.episode_id.value()),
            guest_id: Set(new.guest_id.value()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        episodes: episode_ids.len(),
        guests: guest_ids.len(),
        appearances: fixtures.appearances.len(),
    };

    info!(
        "Seeding complete: {} episodes, {} guests, {} appearances",
        summary.episodes, summary.guests, summary.appearances
    );

    Ok(summary)
}
