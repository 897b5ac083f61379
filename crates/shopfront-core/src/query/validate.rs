use crate::types::Price;
use derive_more::Display;
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// Bound
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Bound {
    #[display("priceMin")]
    Min,
    #[display("priceMax")]
    Max,
}

///
/// ValidationError
///
/// A query whose bounds or term are malformed. Raised at query construction
/// or at engine invocation, never swallowed.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("{bound} must be finite")]
    NonFiniteBound { bound: Bound },

    #[error("{bound} must not be negative (got {value})")]
    NegativeBound { bound: Bound, value: f64 },

    #[error("{bound} is required when the other bound is set")]
    MissingBound { bound: Bound },

    #[error("priceMin ({min}) is greater than priceMax ({max})")]
    InvertedRange { min: f64, max: f64 },

    #[error("priceMax ({max}) exceeds the price ceiling ({ceiling})")]
    AboveCeiling { max: f64, ceiling: f64 },

    #[error("search term must be text (got {found})")]
    TermNotText { found: &'static str },
}

///
/// RangePolicy
///
/// How malformed price bounds are treated. `Strict` rejects them;
/// `Normalize` is the opt-in clamping policy.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    #[default]
    Strict,

    /// Swap inverted bounds, clamp negatives to zero and clamp the upper
    /// bound to the ceiling. Non-finite bounds are still rejected.
    Normalize,
}

// Reject a bound that can never be a price.
pub(crate) fn check_bound(bound: Bound, value: f64) -> Result<Price, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteBound { bound });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeBound { bound, value });
    }

    Price::try_new(value).map_err(|_| ValidationError::NegativeBound { bound, value })
}

// Clamp a finite bound into [0, ceiling].
pub(crate) fn clamp_bound(bound: Bound, value: f64, ceiling: Price) -> Result<Price, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteBound { bound });
    }

    check_bound(bound, value.clamp(0.0, ceiling.get()))
}
