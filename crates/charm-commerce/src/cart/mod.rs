//! Shopping cart module.
//!
//! Contains the cart collection and cart-page pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{
    cart_summary, flat_shipping, free_shipping_progress, free_shipping_threshold, CartSummary,
    FreeShippingProgress, FLAT_SHIPPING_CROWNS, FREE_SHIPPING_THRESHOLD_CROWNS,
};
