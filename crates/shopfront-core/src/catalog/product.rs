use crate::{
    catalog::{CatalogError, ProductRecord},
    types::{Price, ProductId, Rating},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

///
/// Product
///
/// Schema-validated product record. Immutable once it enters a `Catalog`.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    price: Option<Price>,
    rating: Option<Rating>,

    // carried through unexamined
    discounted_price: Option<Value>,
    weight: Option<Value>,
    stock: Option<Value>,
    sku: Option<Value>,
    image_url: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl Product {
    /// Start a product with only its identifier set.
    #[must_use]
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            brand: None,
            category: None,
            price: None,
            rating: None,
            discounted_price: None,
            weight: None,
            stock: None,
            sku: None,
            image_url: None,
            extra: BTreeMap::new(),
        }
    }

    /// Validate one dataset record. `index` is the record's position and is
    /// only used to locate records that have no id.
    pub fn try_from_record(index: usize, record: ProductRecord) -> Result<Self, CatalogError> {
        let id = record.id.ok_or(CatalogError::MissingId { index })?;
        if id.is_blank() {
            return Err(CatalogError::BlankId { index });
        }

        let price = record
            .price
            .map(Price::try_new)
            .transpose()
            .map_err(|source| CatalogError::InvalidPrice {
                id: id.clone(),
                source,
            })?;
        let rating = record
            .rating
            .map(Rating::try_new)
            .transpose()
            .map_err(|source| CatalogError::InvalidRating {
                id: id.clone(),
                source,
            })?;

        Ok(Self {
            id,
            name: record.name,
            brand: record.brand,
            category: record.category,
            price,
            rating,
            discounted_price: record.discounted_price,
            weight: record.weight,
            stock: record.stock,
            sku: record.sku,
            image_url: record.image_url,
            extra: record.extra,
        })
    }

    ///
    /// BUILDERS
    ///

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_discounted_price(mut self, price: impl Into<Value>) -> Self {
        self.discounted_price = Some(price.into());
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<Value>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn with_stock(mut self, stock: impl Into<Value>) -> Self {
        self.stock = Some(stock.into());
        self
    }

    #[must_use]
    pub fn with_sku(mut self, sku: impl Into<Value>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<Value>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    #[must_use]
    pub const fn discounted_price(&self) -> Option<&Value> {
        self.discounted_price.as_ref()
    }

    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    #[must_use]
    pub const fn weight(&self) -> Option<&Value> {
        self.weight.as_ref()
    }

    #[must_use]
    pub const fn stock(&self) -> Option<&Value> {
        self.stock.as_ref()
    }

    #[must_use]
    pub const fn sku(&self) -> Option<&Value> {
        self.sku.as_ref()
    }

    #[must_use]
    pub const fn image_url(&self) -> Option<&Value> {
        self.image_url.as_ref()
    }

    #[must_use]
    pub const fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    ///
    /// DEFAULT SUBSTITUTION
    ///

    /// Price used for range comparison: an absent price counts as zero.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.price.unwrap_or(Price::ZERO)
    }
}
