use crate::types::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// ProductRecord
///
/// Loosely-typed product shape as it appears in the bundled dataset.
/// Every field is optional here; `Product::try_from_record` enforces the
/// required ones. Descriptive fields the engine never reads stay as raw
/// JSON so an odd value in one record cannot reject the dataset.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub discounted_price: Option<Value>,
    pub weight: Option<Value>,
    pub stock: Option<Value>,
    pub sku: Option<Value>,
    pub image_url: Option<Value>,

    /// Unknown fields, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
