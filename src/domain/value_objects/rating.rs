use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// A testimonial rating, always within 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

/// Visual state of one rating indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Filled,
    Empty,
}

impl Rating {
    pub const MAX: u8 = 5;

    /// Create a new Rating, rejecting values outside 0..=5
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=i64::from(Self::MAX)).contains(&value) {
            return Err(ValidationError::RatingOutOfRange {
                actual: value,
                max: Self::MAX,
            });
        }

        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Always `MAX` indicators; the first `value` are filled
    pub fn indicators(self) -> [Indicator; Self::MAX as usize] {
        std::array::from_fn(|index| {
            if index < usize::from(self.0) {
                Indicator::Filled
            } else {
                Indicator::Empty
            }
        })
    }
}

impl Indicator {
    pub fn css_class(self) -> &'static str {
        match self {
            Indicator::Filled => "star star-filled text-yellow-400",
            Indicator::Empty => "star star-empty text-gray-300",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Filled => "★",
            Indicator::Empty => "☆",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rating: Rating) -> usize {
        rating
            .indicators()
            .iter()
            .filter(|i| **i == Indicator::Filled)
            .count()
    }

    #[test]
    fn test_filled_count_matches_rating() {
        for value in 0..=5 {
            let rating = Rating::new(value).unwrap();
            assert_eq!(rating.indicators().len(), 5);
            assert_eq!(filled(rating), value as usize);
        }
    }

    #[test]
    fn test_filled_indicators_come_first() {
        let indicators = Rating::new(3).unwrap().indicators();
        assert_eq!(
            indicators,
            [
                Indicator::Filled,
                Indicator::Filled,
                Indicator::Filled,
                Indicator::Empty,
                Indicator::Empty,
            ]
        );
    }

    #[test]
    fn test_out_of_range_ratings() {
        assert!(Rating::new(-1).is_err());
        assert_eq!(
            Rating::new(6),
            Err(ValidationError::RatingOutOfRange { actual: 6, max: 5 })
        );
        assert!(serde_json::from_str::<Rating>("7").is_err());
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
    }
}
