//! Presentation models for the product grid card and the detail screen.
//!
//! Every absent field resolves through one named fallback below, so the
//! substitution rules can be checked without a UI.

use crate::{
    availability::Availability,
    catalog::Product,
    types::{Price, Rating},
};
use serde::Serialize;
use serde_json::Value;

/// Shown for absent brand, category, or weight.
pub const NOT_AVAILABLE: &str = "N/A";

///
/// ProductCard
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub price: String,
    pub discounted_price: Option<String>,
    pub rating: String,
    pub image_url: Option<String>,
    pub disabled: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, currency: &str) -> Self {
        Self {
            id: product.id().to_string(),
            brand: product.brand().unwrap_or_default().to_string(),
            name: product.name().unwrap_or_default().to_string(),
            price: format_price(currency, product.price()),
            discounted_price: product
                .discounted_price()
                .filter(|value| is_present(value))
                .map(|value| format!("{currency}{}", value_text(value))),
            rating: format_rating(product.rating()),
            image_url: image_url(product),
            disabled: Availability::of(product).is_disabled(),
        }
    }
}

///
/// ProductDetail
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProductDetail {
    pub brand: String,
    pub name: String,
    pub price: String,
    pub rating_badge: String,
    pub stock: String,
    pub category: String,
    pub rating: String,
    pub weight: String,
    pub model: String,
    pub image_url: Option<String>,
}

impl ProductDetail {
    #[must_use]
    pub fn new(product: &Product, currency: &str) -> Self {
        Self {
            brand: text_or_na(product.brand()),
            name: product.name().unwrap_or_default().to_string(),
            price: format_price(currency, product.price()),
            rating_badge: format_rating(product.rating()),
            stock: format!(
                "Stock: {} available!",
                product.stock().map_or_else(|| "0".to_string(), value_text)
            ),
            category: text_or_na(product.category()),
            rating: product.rating().map_or_else(|| "0".to_string(), |r| r.to_string()),
            weight: format!(
                "{} kg",
                product
                    .weight()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), value_text)
            ),
            model: product.sku().map_or_else(|| "0".to_string(), value_text),
            image_url: image_url(product),
        }
    }
}

///
/// FALLBACKS
///

/// Absent price displays as zero.
#[must_use]
pub fn format_price(currency: &str, price: Option<Price>) -> String {
    format!("{currency}{}", price.unwrap_or(Price::ZERO))
}

/// One decimal place, ties rounded up; absent rating displays as `0.0`.
#[must_use]
pub fn format_rating(rating: Option<Rating>) -> String {
    let tenths = (rating.map_or(0.0, Rating::get) * 10.0).round();

    format!("{:.1}", tenths / 10.0)
}

fn text_or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn image_url(product: &Product) -> Option<String> {
    product
        .image_url()
        .filter(|value| is_present(value))
        .map(value_text)
}

// Strings render bare, anything else as its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Null, false, zero and empty text are treated as not set.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{price, rating};

    #[test]
    fn card_formats_present_fields() {
        let product = Product::new(3i64)
            .with_name("Speaker")
            .with_brand("Sony")
            .with_price(price(800.0))
            .with_discounted_price(999)
            .with_rating(rating(4.34));

        let card = ProductCard::new(&product, "₹");

        assert_eq!(card.id, "3");
        assert_eq!(card.brand, "Sony");
        assert_eq!(card.price, "₹800");
        assert_eq!(card.discounted_price.as_deref(), Some("₹999"));
        assert_eq!(card.rating, "4.3");
        assert!(!card.disabled);
    }

    #[test]
    fn card_hides_zero_or_empty_extras() {
        let product = Product::new(4i64)
            .with_name("Trimmer")
            .with_price(price(100.0))
            .with_discounted_price(0)
            .with_image_url("");

        let card = ProductCard::new(&product, "₹");

        assert_eq!(card.discounted_price, None);
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn card_renders_raw_discounted_price() {
        let product = Product::new(5i64)
            .with_discounted_price("1,299")
            .with_image_url("https://cdn.example/kettle.png");

        let card = ProductCard::new(&product, "₹");

        assert_eq!(card.discounted_price.as_deref(), Some("₹1,299"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://cdn.example/kettle.png")
        );
    }

    #[test]
    fn rating_ties_round_up() {
        assert_eq!(format_rating(Some(rating(4.25))), "4.3");
        assert_eq!(format_rating(Some(rating(4.75))), "4.8");
        assert_eq!(format_rating(Some(rating(5.0))), "5.0");
        assert_eq!(format_rating(None), "0.0");
    }

    #[test]
    fn card_substitutes_absent_fields() {
        let product = Product::new("x").with_name("Mystery box");

        let card = ProductCard::new(&product, "₹");

        assert_eq!(card.brand, "");
        assert_eq!(card.price, "₹0");
        assert_eq!(card.discounted_price, None);
        assert_eq!(card.rating, "0.0");
        assert!(card.disabled);
    }

    #[test]
    fn detail_substitutes_absent_fields() {
        let product = Product::new(9i64).with_name("Kettle");

        let detail = ProductDetail::new(&product, "$");

        assert_eq!(detail.brand, "N/A");
        assert_eq!(detail.category, "N/A");
        assert_eq!(detail.price, "$0");
        assert_eq!(detail.rating_badge, "0.0");
        assert_eq!(detail.rating, "0");
        assert_eq!(detail.stock, "Stock: 0 available!");
        assert_eq!(detail.weight, "N/A kg");
        assert_eq!(detail.model, "0");
    }

    #[test]
    fn detail_formats_present_fields() {
        let product = Product::new(1i64)
            .with_name("Smart TV")
            .with_brand("Sony")
            .with_category("Electronics")
            .with_price(price(15000.0))
            .with_rating(rating(4.5))
            .with_weight(12.5)
            .with_stock(7)
            .with_sku("KD-55X");

        let detail = ProductDetail::new(&product, "₹");

        assert_eq!(detail.brand, "Sony");
        assert_eq!(detail.price, "₹15000");
        assert_eq!(detail.rating_badge, "4.5");
        assert_eq!(detail.rating, "4.5");
        assert_eq!(detail.stock, "Stock: 7 available!");
        assert_eq!(detail.weight, "12.5 kg");
        assert_eq!(detail.model, "KD-55X");
    }

    #[test]
    fn detail_renders_loosely_typed_extras() {
        let product = Product::new(-2i64)
            .with_weight("1.5")
            .with_stock("10")
            .with_sku(12345);

        let detail = ProductDetail::new(&product, "₹");

        assert_eq!(detail.weight, "1.5 kg");
        assert_eq!(detail.stock, "Stock: 10 available!");
        assert_eq!(detail.model, "12345");
    }
}
