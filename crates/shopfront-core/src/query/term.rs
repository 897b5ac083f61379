use crate::predicate::fold_ci;
use derive_more::Display;
use serde::Serialize;
use std::borrow::Cow;

///
/// SearchTerm
///
/// Free-text search input. A blank term (empty after trimming) means no
/// text filter.
///

#[derive(Clone, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Case-folded needle, or `None` when the term is blank.
    /// The term is folded as typed; surrounding whitespace is kept.
    #[must_use]
    pub fn needle(&self) -> Option<Cow<'_, str>> {
        if self.is_blank() {
            None
        } else {
            Some(fold_ci(&self.0))
        }
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SearchTerm {
    fn from(s: String) -> Self {
        Self(s)
    }
}
