//! Render-time interaction policy. Not a filtering criterion: a product is
//! annotated the same way whether or not a query selected it.

use crate::catalog::Product;
use serde::Serialize;

///
/// Availability
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Availability {
    Enabled,
    Disabled(DisabledReason),
}

impl Availability {
    /// A product with no price or no rating is shown but not interactive.
    #[must_use]
    pub const fn of(product: &Product) -> Self {
        let reason = DisabledReason {
            missing_price: product.price().is_none(),
            missing_rating: product.rating().is_none(),
        };

        if reason.missing_price || reason.missing_rating {
            Self::Disabled(reason)
        } else {
            Self::Enabled
        }
    }

    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled(_))
    }
}

///
/// DisabledReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DisabledReason {
    pub missing_price: bool,
    pub missing_rating: bool,
}
