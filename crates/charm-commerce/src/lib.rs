//! Domain types and logic for the Fox Charms storefront.
//!
//! This crate holds everything behind the UI:
//!
//! - **Catalog**: the two pendant variants and their static display data
//! - **Cart**: shopping cart lines, totals, free-shipping progress
//! - **Checkout**: shipping options, pickup points, address, validation
//!
//! # Example
//!
//! ```rust
//! use charm_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item(Variant::Fox, 2);
//! assert_eq!(cart.total_price(), Money::from_crowns(118));
//!
//! let summary = cart_summary(&cart);
//! assert_eq!(summary.free_shipping.remaining, Money::from_crowns(882));
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::StoreError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{unit_price, ProductInfo, Review, Variant, UNIT_PRICE_CROWNS};

    // Cart
    pub use crate::cart::{
        cart_summary, free_shipping_progress, Cart, CartLine, CartSummary, FreeShippingProgress,
        FLAT_SHIPPING_CROWNS, FREE_SHIPPING_THRESHOLD_CROWNS,
    };

    // Checkout
    pub use crate::checkout::{
        find_point, sorted_points, Checkout, CheckoutSummary, DeliveryAddress, DeliveryMode,
        PickupPoint, ShippingOption, SortMode, PICKUP_POINTS,
    };
}
