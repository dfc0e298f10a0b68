use crate::domain::GuestId;
use crate::entities::guests;

use super::{Appearance, Episode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub occupation: String,
}

impl From<guests::Model> for Guest {
    fn from(model: guests::Model) -> Self {
        Self {
            id: GuestId::new(model.id),
            name: model.name,
            occupation: model.occupation,
        }
    }
}

/// A guest together with every appearance they made and the episode of each.
#[derive(Debug, Clone)]
pub struct GuestWithAppearances {
    pub guest: Guest,
    pub appearances: Vec<(Appearance, Episode)>,
}
