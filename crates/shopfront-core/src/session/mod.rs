//! Host-side filter state for the product list screen.
//!
//! The engine is stateless; this is the piece of the host that owns the
//! search box, the price slider and the currently visible view, and decides
//! how the two filters compose (see `FilterMode`).

mod slider;

#[cfg(test)]
mod tests;

pub use slider::PriceSlider;

use crate::{
    catalog::Catalog,
    config::FilterConfig,
    display::ProductCard,
    engine::{FilterMode, QueryEngine},
    query::{PriceRange, Query, ValidationError},
    view::View,
};

///
/// FilterSession
///
/// Invariant: `visible()` always equals `engine.apply(catalog, &query())`.
///

#[derive(Debug)]
pub struct FilterSession<'a> {
    catalog: &'a Catalog,
    engine: QueryEngine,
    mode: FilterMode,
    currency: String,
    slider: PriceSlider,
    search_text: String,
    text_applied: bool,
    applied_price: Option<PriceRange>,
    visible: View<'a>,
}

impl<'a> FilterSession<'a> {
    /// Start with the full catalog visible and no filter applied.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &FilterConfig) -> Self {
        Self {
            catalog,
            engine: QueryEngine::from_config(config),
            mode: config.mode,
            currency: config.currency_symbol.clone(),
            slider: PriceSlider::new(config),
            search_text: String::new(),
            text_applied: false,
            applied_price: None,
            visible: catalog.all(),
        }
    }

    /// Replace the engine (e.g. to attach a trace sink).
    #[must_use]
    pub const fn with_engine(mut self, engine: QueryEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Search box changed.
    pub fn search(&mut self, text: impl Into<String>) -> Result<&View<'a>, ValidationError> {
        self.search_text = text.into();
        self.text_applied = true;

        match self.mode {
            FilterMode::Independent => {
                self.applied_price = None;
                self.visible = self.engine.filter_by_text(self.catalog, &self.search_text);
            }
            FilterMode::Combined => {
                self.visible = self.engine.apply(self.catalog, &self.query())?;
            }
        }

        Ok(&self.visible)
    }

    /// Slider handles moved. Nothing is re-filtered until the filter is applied.
    pub fn drag_price(&mut self, min: f64, max: f64) {
        self.slider.drag(min, max);
    }

    /// Apply the slider's current range.
    pub fn apply_price_filter(&mut self) -> Result<&View<'a>, ValidationError> {
        let range = self.slider.range();

        match self.mode {
            FilterMode::Independent => {
                self.visible = self.engine.filter_by_price(
                    self.catalog,
                    range.min().get(),
                    range.max().get(),
                )?;
                self.text_applied = false;
                self.applied_price = Some(range);
            }
            FilterMode::Combined => {
                self.applied_price = Some(range);
                self.visible = self.engine.apply(self.catalog, &self.query())?;
            }
        }

        Ok(&self.visible)
    }

    /// The filter intent the visible view currently reflects.
    #[must_use]
    pub fn query(&self) -> Query {
        let query = if self.text_applied {
            Query::text(self.search_text.as_str())
        } else {
            Query::new()
        };

        match self.applied_price {
            Some(range) => query.with_price_range(range),
            None => query,
        }
    }

    #[must_use]
    pub const fn visible(&self) -> &View<'a> {
        &self.visible
    }

    /// Drives the "No results found" state.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Grid cards for the visible products.
    #[must_use]
    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible
            .iter()
            .map(|product| ProductCard::new(product, &self.currency))
            .collect()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn slider(&self) -> &PriceSlider {
        &self.slider
    }

    #[must_use]
    pub const fn applied_price(&self) -> Option<&PriceRange> {
        self.applied_price.as_ref()
    }

    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }
}
