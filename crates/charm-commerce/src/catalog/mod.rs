//! Product catalog: the two pendant variants and their display data.

mod product;
mod review;

pub use product::{unit_price, ProductInfo, Variant, UNIT_PRICE_CROWNS};
pub use review::Review;
