use crate::{
    catalog::Product,
    predicate::{
        ProductPredicate, TextField,
        text::{contains_folded, fold_ci},
    },
    types::Price,
};

///
/// Text-match predicate.
///
/// A blank term passes every product. Otherwise the lower-cased term must
/// be a substring of the lower-cased name, brand, or category.
///
#[must_use]
pub fn matches_text(product: &Product, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }

    matches_needle(product, &fold_ci(term))
}

///
/// Range-match predicate.
///
/// Compares the effective price (absent = 0) against `[min, max]`,
/// inclusive on both ends.
///
#[must_use]
pub fn matches_price(product: &Product, min: Price, max: Price) -> bool {
    let price = product.effective_price();

    min <= price && price <= max
}

fn matches_needle(product: &Product, needle: &str) -> bool {
    TextField::SEARCHABLE
        .iter()
        .any(|field| contains_folded(field.read(product), needle))
}

pub(super) fn eval(product: &Product, predicate: &ProductPredicate) -> bool {
    match predicate {
        ProductPredicate::True => true,
        ProductPredicate::And(children) => children.iter().all(|child| eval(product, child)),
        ProductPredicate::TextContainsCi { needle } => matches_needle(product, needle),
        ProductPredicate::PriceBetween(range) => matches_price(product, range.min(), range.max()),
    }
}
