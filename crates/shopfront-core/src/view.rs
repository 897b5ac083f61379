use crate::{
    availability::Availability,
    catalog::Product,
    types::ProductId,
};

///
/// View
///
/// Ordered subset of a catalog, borrowed from it. Relative order always
/// matches the catalog. A view is a result: recompute it, don't store it.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct View<'a> {
    items: Vec<&'a Product>,
}

impl<'a> View<'a> {
    pub(crate) const fn from_refs(items: Vec<&'a Product>) -> Self {
        Self { items }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Product> {
        self.items.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Identifiers in view order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'a ProductId> {
        self.items.iter().map(|&product| product.id()).collect()
    }

    /// Pair each product with its render-time availability. Evaluated per
    /// product, independent of why it is in the view.
    pub fn annotated(&self) -> impl ExactSizeIterator<Item = (&'a Product, Availability)> + '_ {
        self.iter().map(|product| (product, Availability::of(product)))
    }
}

impl<'a> IntoIterator for View<'a> {
    type Item = &'a Product;
    type IntoIter = std::vec::IntoIter<&'a Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'v, 'a> IntoIterator for &'v View<'a> {
    type Item = &'a Product;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
