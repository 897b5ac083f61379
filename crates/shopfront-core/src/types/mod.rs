//! Validated scalar types carried by product records.

mod id;
mod price;
mod rating;


pub use id::ProductId;
pub use price::{Price, PriceError};
pub use rating::{Rating, RatingError};
