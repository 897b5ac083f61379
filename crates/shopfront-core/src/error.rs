use crate::{catalog::CatalogError, config::ConfigError, query::ValidationError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error. Each concern keeps its own enum; this wraps them for
/// hosts that want a single `?` target.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) => ErrorClass::Validation,
            Self::Catalog(_) => ErrorClass::InvalidInput,
            Self::Config(_) => ErrorClass::Config,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Validation(_) => ErrorOrigin::Query,
            Self::Catalog(_) => ErrorOrigin::Catalog,
            Self::Config(_) => ErrorOrigin::Config,
        }
    }
}

///
/// ErrorClass
/// Stable classification, independent of message text.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Caller built a malformed query.
    Validation,
    /// Dataset records failed schema checks.
    InvalidInput,
    Config,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Query,
    Catalog,
    Config,
}
