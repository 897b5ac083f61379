use crate::query::{Bound, PriceRange, Query, SearchTerm, ValidationError};
use serde::Deserialize;
use serde_json::Value as JsonValue;

///
/// QueryParams
///
/// Loosely-typed filter input (deep links, saved screens, test drivers).
/// Converted into a `Query` with full validation.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub term: Option<JsonValue>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl QueryParams {
    fn term(&self) -> Result<SearchTerm, ValidationError> {
        match &self.term {
            None | Some(JsonValue::Null) => Ok(SearchTerm::default()),
            Some(JsonValue::String(s)) => Ok(SearchTerm::new(s.as_str())),
            Some(other) => Err(ValidationError::TermNotText {
                found: json_kind(other),
            }),
        }
    }
}

impl TryFrom<QueryParams> for Query {
    type Error = ValidationError;

    fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
        let term = params.term()?;

        let price = match (params.price_min, params.price_max) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(PriceRange::new(min, max)?),
            (None, Some(_)) => return Err(ValidationError::MissingBound { bound: Bound::Min }),
            (Some(_), None) => return Err(ValidationError::MissingBound { bound: Bound::Max }),
        };

        let query = Self::text(term);

        Ok(match price {
            Some(range) => query.with_price_range(range),
            None => query,
        })
    }
}

const fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
