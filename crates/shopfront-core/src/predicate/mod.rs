mod eval;
mod text;


pub use eval::{matches_price, matches_text};
pub(crate) use text::fold_ci;

use crate::{
    catalog::Product,
    query::{PriceRange, Query},
};

///
/// Predicate AST
///
/// Compiled form of a `Query`. Compilation folds the term once, so
/// evaluation over a catalog never re-lowercases the needle.
///

///
/// TextField
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextField {
    Name,
    Brand,
    Category,
}

impl TextField {
    /// Fields a search term is matched against, in evaluation order.
    pub const SEARCHABLE: [Self; 3] = [Self::Name, Self::Brand, Self::Category];

    /// Read the field; absent text reads as empty.
    #[must_use]
    pub fn read(self, product: &Product) -> &str {
        let value = match self {
            Self::Name => product.name(),
            Self::Brand => product.brand(),
            Self::Category => product.category(),
        };

        value.unwrap_or_default()
    }
}

///
/// ProductPredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductPredicate {
    True,
    And(Vec<Self>),

    /// Case-insensitive containment of an already-folded needle in any of
    /// the searchable fields.
    TextContainsCi { needle: String },

    /// Effective price inside an inclusive range.
    PriceBetween(PriceRange),
}

impl ProductPredicate {
    /// Compile the conjunction of a query's text and price constraints.
    /// Inactive constraints are omitted rather than compiled to `True`.
    #[must_use]
    pub fn from_query(query: &Query) -> Self {
        let mut clauses = Vec::with_capacity(2);

        if let Some(needle) = query.term().needle() {
            clauses.push(Self::TextContainsCi {
                needle: needle.into_owned(),
            });
        }
        if let Some(range) = query.price_range() {
            clauses.push(Self::PriceBetween(*range));
        }

        match clauses.len() {
            0 => Self::True,
            1 => clauses.remove(0),
            _ => Self::And(clauses),
        }
    }

    /// Text clause for a raw term, or `None` for a blank term.
    #[must_use]
    pub fn text(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }

        Some(Self::TextContainsCi {
            needle: fold_ci(term).into_owned(),
        })
    }

    #[must_use]
    pub fn eval(&self, product: &Product) -> bool {
        eval::eval(product, self)
    }
}
