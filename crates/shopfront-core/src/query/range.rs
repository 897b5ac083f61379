use crate::{
    query::validate::{Bound, RangePolicy, ValidationError, check_bound, clamp_bound},
    types::Price,
};
use serde::Serialize;

///
/// PriceRange
///
/// Closed interval `[min, max]` with `0 <= min <= max`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Build a range from raw bounds, rejecting anything malformed.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        let min_price = check_bound(Bound::Min, min)?;
        let max_price = check_bound(Bound::Max, max)?;

        Self::from_prices(min_price, max_price)
    }

    /// Build a range from already-valid prices.
    pub fn from_prices(min: Price, max: Price) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvertedRange {
                min: min.get(),
                max: max.get(),
            });
        }

        Ok(Self { min, max })
    }

    // Caller guarantees `min <= max`.
    pub(crate) const fn from_ordered(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Build a range from raw bounds under an explicit policy and ceiling.
    pub fn resolve(
        min: f64,
        max: f64,
        policy: RangePolicy,
        ceiling: Price,
    ) -> Result<Self, ValidationError> {
        match policy {
            RangePolicy::Strict => Self::new(min, max)?.within(ceiling, policy),
            RangePolicy::Normalize => {
                let a = clamp_bound(Bound::Min, min, ceiling)?;
                let b = clamp_bound(Bound::Max, max, ceiling)?;

                Ok(Self {
                    min: a.min(b),
                    max: a.max(b),
                })
            }
        }
    }

    /// Check this range against a ceiling. `Strict` rejects an upper bound
    /// above the ceiling; `Normalize` clamps both bounds to it.
    pub fn within(self, ceiling: Price, policy: RangePolicy) -> Result<Self, ValidationError> {
        if self.max <= ceiling {
            return Ok(self);
        }

        match policy {
            RangePolicy::Strict => Err(ValidationError::AboveCeiling {
                max: self.max.get(),
                ceiling: ceiling.get(),
            }),
            RangePolicy::Normalize => Ok(Self {
                min: self.min.min(ceiling),
                max: ceiling,
            }),
        }
    }

    /// `[0, ceiling]`
    #[must_use]
    pub const fn full(ceiling: Price) -> Self {
        Self {
            min: Price::ZERO,
            max: ceiling,
        }
    }

    #[must_use]
    pub const fn min(&self) -> Price {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Price {
        self.max
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}
