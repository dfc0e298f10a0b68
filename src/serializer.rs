//! Projections from the record graph into JSON-ready views.
//!
//! Episodes and guests reference each other through appearances, so a naive
//! recursive dump never terminates. Each view below is a fixed-shape tree:
//!
//! - list views are flat (`EpisodeView`, `GuestView`) and carry no
//!   `appearances` at all;
//! - detail views expand `appearances` once, and every parent nested inside an
//!   appearance is again a flat view;
//! - an appearance view nests both parents as flat views.
//!
//! Because the flat views have no collection field, expansion past one hop
//! cannot be expressed, let alone produced.

use serde::Serialize;

use crate::domain::{AppearanceId, EpisodeId, GuestId, Rating};
use crate::models::{
    Appearance, AppearanceWithParents, Episode, EpisodeWithAppearances, Guest,
    GuestWithAppearances,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeView {
    pub id: EpisodeId,
    pub date: String,
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestView {
    pub id: GuestId,
    pub name: String,
    pub occupation: String,
}

/// An appearance listed under an episode; the guest is expanded, the episode is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeAppearanceView {
    pub id: AppearanceId,
    pub rating: Rating,
    pub episode_id: EpisodeId,
    pub guest_id: GuestId,
    pub guest: GuestView,
}

/// An appearance listed under a guest; the episode is expanded, the guest is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestAppearanceView {
    pub id: AppearanceId,
    pub rating: Rating,
    pub episode_id: EpisodeId,
    pub guest_id: GuestId,
    pub episode: EpisodeView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeDetailView {
    #[serde(flatten)]
    pub episode: EpisodeView,
    pub appearances: Vec<EpisodeAppearanceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestDetailView {
    #[serde(flatten)]
    pub guest: GuestView,
    pub appearances: Vec<GuestAppearanceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppearanceView {
    pub id: AppearanceId,
    pub rating: Rating,
    pub episode_id: EpisodeId,
    pub guest_id: GuestId,
    pub episode: EpisodeView,
    pub guest: GuestView,
}

#[must_use]
pub fn episode_summary(episode: &Episode) -> EpisodeView {
    EpisodeView {
        id: episode.id,
        date: episode.date.clone(),
        number: episode.number,
    }
}

#[must_use]
pub fn guest_summary(guest: &Guest) -> GuestView {
    GuestView {
        id: guest.id,
        name: guest.name.clone(),
        occupation: guest.occupation.clone(),
    }
}

#[must_use]
pub fn episode_list(episodes: &[Episode]) -> Vec<EpisodeView> {
    episodes.iter().map(episode_summary).collect()
}

#[must_use]
pub fn guest_list(guests: &[Guest]) -> Vec<GuestView> {
    guests.iter().map(guest_summary).collect()
}

#[must_use]
pub fn episode_detail(record: &EpisodeWithAppearances) -> EpisodeDetailView {
    EpisodeDetailView {
        episode: episode_summary(&record.episode),
        appearances: record
            .appearances
            .iter()
            .map(|(appearance, guest)| EpisodeAppearanceView {
                id: appearance.id,
                rating: appearance.rating(),
                episode_id: appearance.episode_id,
                guest_id: appearance.guest_id,
                guest: guest_summary(guest),
            })
            .collect(),
    }
}

#[must_use]
pub fn guest_detail(record: &GuestWithAppearances) -> GuestDetailView {
    GuestDetailView {
        guest: guest_summary(&record.guest),
        appearances: record
            .appearances
            .iter()
            .map(|(appearance, episode)| GuestAppearanceView {
                id: appearance.id,
                rating: appearance.rating(),
                episode_id: appearance.episode_id,
                guest_id: appearance.guest_id,
                episode: episode_summary(episode),
            })
            .collect(),
    }
}

#[must_use]
pub fn appearance_detail(record: &AppearanceWithParents) -> AppearanceView {
    let AppearanceWithParents {
        appearance,
        episode,
        guest,
    } = record;

    appearance_view(appearance, episode, guest)
}

fn appearance_view(appearance: &Appearance, episode: &Episode, guest: &Guest) -> AppearanceView {
    AppearanceView {
        id: appearance.id,
        rating: appearance.rating(),
        episode_id: appearance.episode_id,
        guest_id: appearance.guest_id,
        episode: episode_summary(episode),
        guest: guest_summary(guest),
    }
}
