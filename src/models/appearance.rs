use crate::domain::{AppearanceId, EpisodeId, GuestId, Rating, ValidationError};
use crate::entities::appearances;

use super::{Episode, Guest};

/// A guest's appearance on an episode, carrying its own rating.
///
/// `rating` is private: it can only be set through [`Appearance::new`] or
/// [`Appearance::set_rating`], both of which run the range check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub id: AppearanceId,
    rating: Rating,
    pub episode_id: EpisodeId,
    pub guest_id: GuestId,
}

impl Appearance {
    pub fn new(
        id: AppearanceId,
        rating: i64,
        episode_id: EpisodeId,
        guest_id: GuestId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            rating: Rating::new(rating)?,
            episode_id,
            guest_id,
        })
    }

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Replaces the rating. On failure the previous rating is kept.
    pub fn set_rating(&mut self, rating: i64) -> Result<(), ValidationError> {
        self.rating = Rating::new(rating)?;
        Ok(())
    }
}

impl TryFrom<appearances::Model> for Appearance {
    type Error = ValidationError;

    fn try_from(model: appearances::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AppearanceId::new(model.id),
            rating: Rating::try_from(model.rating)?,
            episode_id: EpisodeId::new(model.episode_id),
            guest_id: GuestId::new(model.guest_id),
        })
    }
}

/// A validated appearance that has not been written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAppearance {
    pub rating: Rating,
    pub episode_id: EpisodeId,
    pub guest_id: GuestId,
}

impl NewAppearance {
    pub fn new(
        rating: i64,
        episode_id: EpisodeId,
        guest_id: GuestId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            rating: Rating::new(rating)?,
            episode_id,
            guest_id,
        })
    }
}

/// An appearance with both of its parents loaded.
#[derive(Debug, Clone)]
pub struct AppearanceWithParents {
    pub appearance: Appearance,
    pub episode: Episode,
    pub guest: Guest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (AppearanceId, EpisodeId, GuestId) {
        (AppearanceId::new(1), EpisodeId::new(1), GuestId::new(1))
    }

    #[test]
    fn construction_runs_the_range_check() {
        let (id, episode_id, guest_id) = ids();

        for rating in [1, 3, 5] {
            assert!(Appearance::new(id, rating, episode_id, guest_id).is_ok());
        }
        for rating in [0, 6] {
            assert_eq!(
                Appearance::new(id, rating, episode_id, guest_id),
                Err(ValidationError::RatingOutOfRange)
            );
        }
    }

    #[test]
    fn failed_assignment_keeps_previous_rating() {
        let (id, episode_id, guest_id) = ids();
        let mut appearance = Appearance::new(id, 4, episode_id, guest_id).unwrap();

        assert!(appearance.set_rating(9).is_err());
        assert_eq!(appearance.rating().value(), 4);

        appearance.set_rating(2).unwrap();
        assert_eq!(appearance.rating().value(), 2);
    }

    #[test]
    fn new_appearance_checks_rating() {
        let (_, episode_id, guest_id) = ids();

        assert!(NewAppearance::new(0, episode_id, guest_id).is_err());
        assert_eq!(
            NewAppearance::new(5, episode_id, guest_id).map(|new| new.rating.value()),
            Ok(5)
        );
    }

    #[test]
    fn stored_row_with_bad_rating_is_rejected() {
        let model = appearances::Model {
            id: 1,
            rating: 7,
            episode_id: 1,
            guest_id: 1,
        };
        assert!(Appearance::try_from(model).is_err());
    }
}
