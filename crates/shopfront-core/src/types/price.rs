use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Price
///
/// Finite, non-negative f64; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Deserialize, Serialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Self = Self(0.0);

    /// Fallible constructor that rejects non-finite and negative values.
    pub fn try_new(v: f64) -> Result<Self, PriceError> {
        if !v.is_finite() {
            return Err(PriceError::NonFinite);
        }
        if v < 0.0 {
            return Err(PriceError::Negative { value: v });
        }

        // canonicalize -0.0 → 0.0
        Ok(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

///
/// PriceError
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
pub enum PriceError {
    #[error("price must be finite")]
    NonFinite,

    #[error("price must not be negative (got {value})")]
    Negative { value: f64 },
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<u32> for Price {
    fn from(n: u32) -> Self {
        Self(f64::from(n))
    }
}

impl Eq for Price {}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        // finite by construction, so total_cmp agrees with numeric order
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
