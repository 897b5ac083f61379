//! Immutable product catalog and the dataset boundary that builds it.

mod product;
mod record;


pub use product::Product;
pub use record::ProductRecord;

use crate::{
    types::{PriceError, ProductId, RatingError},
    view::View,
};
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("product record at index {index} has no id")]
    MissingId { index: usize },

    #[error("product record at index {index} has a blank id")]
    BlankId { index: usize },

    #[error("duplicate product id '{id}'")]
    DuplicateId { id: ProductId },

    #[error("invalid price on product '{id}': {source}")]
    InvalidPrice { id: ProductId, source: PriceError },

    #[error("invalid rating on product '{id}': {source}")]
    InvalidRating { id: ProductId, source: RatingError },

    #[error("dataset decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

///
/// Catalog
///
/// Session-lifetime product collection. Loaded once, never mutated, and
/// cheap to clone (clones share the same backing slice).
///

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Arc<[Product]>,
    by_id: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Build a catalog from validated products, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            match by_id.entry(product.id().clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateId {
                        id: product.id().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        Ok(Self {
            products: products.into(),
            by_id: Arc::new(by_id),
        })
    }

    /// Validate raw dataset records in order and build a catalog.
    pub fn from_records(
        records: impl IntoIterator<Item = ProductRecord>,
    ) -> Result<Self, CatalogError> {
        let products = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Product::try_from_record(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(products)
    }

    /// Decode the bundled dataset format: a JSON array of product objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;

        Self::from_records(records)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_slice(bytes)?;

        Self::from_records(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id (detail screen navigation).
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// Unfiltered view over every product, in catalog order.
    #[must_use]
    pub fn all(&self) -> View<'_> {
        View::from_refs(self.products.iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
