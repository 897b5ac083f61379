use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ProductId
///
/// Stable product identifier. Datasets use either integers or strings.
///

#[derive(Clone, Debug, Display, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl ProductId {
    /// True for a text id that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
