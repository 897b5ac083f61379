//! Immutable filter intent: a search term plus an optional price range.

mod params;
mod range;
mod term;
mod validate;


pub use params::QueryParams;
pub use range::PriceRange;
pub use term::SearchTerm;
pub use validate::{Bound, RangePolicy, ValidationError};

use serde::Serialize;

///
/// Query
///
/// One value per user interaction. A query with a blank term and no price
/// range selects the whole catalog.
///
/// The price range is optional: the list screen's slider starts at a default
/// position, but no price constraint is active until one is applied.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Query {
    term: SearchTerm,
    price: Option<PriceRange>,
}

impl Query {
    /// Unconstrained query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text-only query.
    #[must_use]
    pub fn text(term: impl Into<SearchTerm>) -> Self {
        Self {
            term: term.into(),
            price: None,
        }
    }

    /// Price-only query over `[min, max]`.
    pub fn price(min: f64, max: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            term: SearchTerm::default(),
            price: Some(PriceRange::new(min, max)?),
        })
    }

    /// Term plus price range, validated.
    pub fn try_new(term: impl Into<SearchTerm>, min: f64, max: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            term: term.into(),
            price: Some(PriceRange::new(min, max)?),
        })
    }

    #[must_use]
    pub fn with_term(self, term: impl Into<SearchTerm>) -> Self {
        Self {
            term: term.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_price_range(self, range: PriceRange) -> Self {
        Self {
            price: Some(range),
            ..self
        }
    }

    #[must_use]
    pub fn without_price_range(self) -> Self {
        Self {
            price: None,
            ..self
        }
    }

    #[must_use]
    pub const fn term(&self) -> &SearchTerm {
        &self.term
    }

    #[must_use]
    pub const fn price_range(&self) -> Option<&PriceRange> {
        self.price.as_ref()
    }

    /// True when the query selects every product.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.term.is_blank() && self.price.is_none()
    }
}
