use crate::domain::EpisodeId;
use crate::entities::episodes;

use super::{Appearance, Guest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: EpisodeId,
    pub date: String,
    pub number: i32,
}

impl From<episodes::Model> for Episode {
    fn from(model: episodes::Model) -> Self {
        Self {
            id: EpisodeId::new(model.id),
            date: model.date,
            number: model.number,
        }
    }
}

/// An episode together with every appearance on it and the guest of each.
#[derive(Debug, Clone)]
pub struct EpisodeWithAppearances {
    pub episode: Episode,
    pub appearances: Vec<(Appearance, Guest)>,
}
