//! Domain types for the show's records with strong typing.
//!
//! Every table uses surrogate integer keys. The newtypes here keep an
//! `EpisodeId` from being passed where a `GuestId` is expected, while still
//! serializing as plain integers on the wire.

pub mod rating;

pub use rating::{MAX_RATING, MIN_RATING, Rating, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::TryFromIntError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }

        /// Fails for values no row can carry.
        impl TryFrom<i64> for $name {
            type Error = TryFromIntError;

            fn try_from(id: i64) -> Result<Self, Self::Error> {
                i32::try_from(id).map(Self)
            }
        }
    };
}

record_id!(
    /// Identifier of a row in the `episodes` table.
    EpisodeId
);

record_id!(
    /// Identifier of a row in the `guests` table.
    GuestId
);

record_id!(
    /// Identifier of a row in the `appearances` table.
    AppearanceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_id_conversions() {
        let id = EpisodeId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(EpisodeId::from(42), id);
    }

    #[test]
    fn wide_ids_only_convert_when_they_fit() {
        assert_eq!(GuestId::try_from(9_i64), Ok(GuestId::new(9)));
        assert!(EpisodeId::try_from(3_000_000_000_i64).is_err());
        assert!(EpisodeId::try_from(i64::MIN).is_err());
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&GuestId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: AppearanceId = serde_json::from_str("13").unwrap();
        assert_eq!(id, AppearanceId::new(13));
    }
}
