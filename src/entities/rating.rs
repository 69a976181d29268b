use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_rating_error, Error};

/// A 1 to 5 star rating. Out-of-range values are rejected, never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, Error> {
        match u8::try_from(value) {
            Ok(stars) if (Self::MIN..=Self::MAX).contains(&stars) => Ok(Self(stars)),
            _ => Err(invalid_rating_error(value)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        for value in [0, 6, -1, 256, i64::MAX] {
            let err = Rating::new(value).unwrap_err();
            assert_eq!(err.code, crate::error::INVALID_RATING);
        }
    }

    #[test]
    fn deserialization_goes_through_validation() {
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::to_string(&Rating::new(2).unwrap()).unwrap(), "2");
    }
}
