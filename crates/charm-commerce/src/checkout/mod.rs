//! Checkout module.
//!
//! Contains shipping options, pickup points, the delivery address, and
//! the checkout flow state.

mod address;
mod flow;
mod pickup;
mod shipping;

pub use address::DeliveryAddress;
pub use flow::{Checkout, CheckoutSummary};
pub use pickup::{find_point, sorted_points, PickupPoint, SortMode, PICKUP_POINTS};
pub use shipping::{DeliveryMode, ShippingOption};
