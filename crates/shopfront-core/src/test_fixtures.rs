use crate::{
    catalog::{Catalog, Product},
    types::{Price, ProductId, Rating},
    view::View,
};

pub(crate) fn price(v: f64) -> Price {
    Price::try_new(v).expect("test price")
}

pub(crate) fn rating(v: f64) -> Rating {
    Rating::try_new(v).expect("test rating")
}

// Catalog from the reference scenario.
pub(crate) fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1i64)
            .with_name("Smart TV")
            .with_brand("Sony")
            .with_price(price(15000.0)),
        Product::new(2i64)
            .with_name("Blender")
            .with_brand("Philips")
            .with_price(price(1200.0)),
        Product::new(3i64)
            .with_name("Speaker")
            .with_brand("Sony")
            .with_price(price(800.0)),
    ])
    .expect("unique ids")
}

// Mixed catalog, every product priced under the default ceiling.
pub(crate) fn grid_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(10i64)
            .with_name("Wireless Earbuds")
            .with_brand("Boat")
            .with_category("Audio")
            .with_price(price(1499.0))
            .with_rating(rating(4.1)),
        Product::new(11i64)
            .with_name("Mixer Grinder")
            .with_brand("Philips")
            .with_category("Kitchen")
            .with_price(price(2999.0))
            .with_rating(rating(4.4)),
        Product::new(12i64)
            .with_name("Gift Card")
            .with_category("Vouchers"),
        Product::new(13i64)
            .with_name("Toaster")
            .with_brand("Bajaj")
            .with_category("Kitchen")
            .with_price(price(100.0)),
        Product::new(14i64)
            .with_name("Bluetooth Speaker")
            .with_brand("JBL")
            .with_category("Audio")
            .with_price(price(2500.0))
            .with_rating(rating(4.7)),
    ])
    .expect("unique ids")
}

pub(crate) fn ids(view: &View<'_>) -> Vec<ProductId> {
    view.iter().map(|product| product.id().clone()).collect()
}

pub(crate) fn int_ids(ns: &[i64]) -> Vec<ProductId> {
    ns.iter().copied().map(ProductId::Int).collect()
}
