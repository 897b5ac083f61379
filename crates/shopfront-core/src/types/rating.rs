use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// Rating
///
/// Finite f64 in the closed interval [0, 5]
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Deserialize, Serialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn try_new(v: f64) -> Result<Self, RatingError> {
        if !v.is_finite() || !(0.0..=Self::MAX).contains(&v) {
            return Err(RatingError::OutOfRange { value: v });
        }

        Ok(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

///
/// RatingError
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
pub enum RatingError {
    #[error("rating must be within [0, 5] (got {value})")]
    OutOfRange { value: f64 },
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Eq for Rating {}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
