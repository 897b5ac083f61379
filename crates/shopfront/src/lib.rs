//! ## Crate layout
//! - `core`: product model, catalog, queries, predicates, engine, and
//!   observability.
//!
//! The `prelude` module mirrors the surface a storefront screen needs:
//! build a catalog once, turn user input into a `Query`, render the `View`.

pub use shopfront_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    Error,
    engine::{apply, filter_by_price, filter_by_text},
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        availability::{Availability, DisabledReason},
        catalog::{Catalog, Product, ProductRecord},
        config::FilterConfig,
        display::{ProductCard, ProductDetail},
        engine::{FilterMode, QueryEngine},
        prelude::*,
        query::{QueryParams, RangePolicy, ValidationError},
        session::{FilterSession, PriceSlider},
    };
    pub use serde::{Deserialize, Serialize};
}
