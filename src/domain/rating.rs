use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Rejection raised when a field fails its model-level rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Rating must be between {} and {}.", MIN_RATING, MAX_RATING)]
    RatingOutOfRange,
}

/// An appearance rating, always within `MIN_RATING..=MAX_RATING`.
///
/// The only ways to obtain one are the checked constructors below, so holding
/// a `Rating` is proof the range check already ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            return Err(ValidationError::RatingOutOfRange);
        }

        i32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::RatingOutOfRange)
    }

    /// Validates a rating taken straight from a request body.
    ///
    /// Integers and integer-valued numbers (`4.0`) are accepted; strings,
    /// booleans, `null` and fractional numbers are not.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Value::Number(number) = value else {
            return Err(ValidationError::RatingOutOfRange);
        };

        if let Some(int) = number.as_i64() {
            return Self::new(int);
        }

        match number.as_f64() {
            Some(float) if float.fract() == 0.0 => {
                if !(f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&float) {
                    return Err(ValidationError::RatingOutOfRange);
                }
                #[allow(clippy::cast_possible_truncation)]
                Self::new(float as i64)
            }
            _ => Err(ValidationError::RatingOutOfRange),
        }
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
