//! Core runtime for Shopfront: the product model, the immutable catalog,
//! query values and predicates, the stateless query engine, and the
//! host-side pieces (session, display, config) built on top of it.
#![warn(unreachable_pub)]

pub mod availability;
pub mod catalog;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod obs;
pub mod predicate;
pub mod query;
pub mod session;
pub mod types;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only. No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        availability::Availability,
        catalog::{Catalog, Product},
        engine::{FilterMode, QueryEngine},
        query::{PriceRange, Query, SearchTerm},
        types::{Price, ProductId, Rating},
        view::View,
    };
}
