//! Host-supplied filter configuration, loadable from TOML.

use crate::{engine::FilterMode, query::RangePolicy, types::Price};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Absolute upper bound of the price slider.
pub const DEFAULT_PRICE_CEILING: u32 = 3000;

/// Slider step granularity.
pub const DEFAULT_PRICE_STEP: u32 = 100;

/// Slider position before the user touches it.
pub const DEFAULT_PRICE_MIN: u32 = 0;
pub const DEFAULT_PRICE_MAX: u32 = 2500;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

///
/// FilterConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub price_ceiling: Price,
    pub price_step: Price,
    pub default_min: Price,
    pub default_max: Price,
    pub mode: FilterMode,
    pub range_policy: RangePolicy,
    pub currency_symbol: String,
}

impl FilterConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_ceiling == Price::ZERO {
            return Err(ConfigError::invalid("price_ceiling", "must be positive"));
        }
        if self.price_step == Price::ZERO {
            return Err(ConfigError::invalid("price_step", "must be positive"));
        }
        if self.price_step > self.price_ceiling {
            return Err(ConfigError::invalid(
                "price_step",
                format!("{} exceeds price_ceiling {}", self.price_step, self.price_ceiling),
            ));
        }
        if self.default_min > self.default_max {
            return Err(ConfigError::invalid(
                "default_min",
                format!("{} exceeds default_max {}", self.default_min, self.default_max),
            ));
        }
        if self.default_max > self.price_ceiling {
            return Err(ConfigError::invalid(
                "default_max",
                format!("{} exceeds price_ceiling {}", self.default_max, self.price_ceiling),
            ));
        }

        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_ceiling: Price::from(DEFAULT_PRICE_CEILING),
            price_step: Price::from(DEFAULT_PRICE_STEP),
            default_min: Price::from(DEFAULT_PRICE_MIN),
            default_max: Price::from(DEFAULT_PRICE_MAX),
            mode: FilterMode::default(),
            range_policy: RangePolicy::default(),
            currency_symbol: "₹".to_string(),
        }
    }
}
