//! Cart-page pricing: free-shipping progress and the flat estimate.
//!
//! The cart page quotes a flat shipping estimate waived above the
//! free-shipping threshold. The checkout page quotes the selected
//! carrier's price instead and never applies the threshold; that
//! distinction is deliberate (estimate vs. final cost).

use crate::cart::Cart;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotal above which cart-page shipping is waived, in crowns.
pub const FREE_SHIPPING_THRESHOLD_CROWNS: i64 = 1000;

/// Flat cart-page shipping estimate below the threshold, in crowns.
pub const FLAT_SHIPPING_CROWNS: i64 = 50;

/// The free-shipping threshold as a `Money` value.
pub fn free_shipping_threshold() -> Money {
    Money::from_crowns(FREE_SHIPPING_THRESHOLD_CROWNS)
}

/// The flat shipping estimate as a `Money` value.
pub fn flat_shipping() -> Money {
    Money::from_crowns(FLAT_SHIPPING_CROWNS)
}

/// Progress toward free shipping for a given subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeShippingProgress {
    /// Amount still missing, zero once qualified.
    pub remaining: Money,
    /// Progress toward the threshold, 0-100.
    pub percent: f64,
    /// Whether the subtotal has reached the threshold.
    pub qualified: bool,
}

/// Compute free-shipping progress from a subtotal.
pub fn free_shipping_progress(subtotal: Money) -> FreeShippingProgress {
    let threshold = free_shipping_threshold();
    let qualified = subtotal.amount_minor >= threshold.amount_minor;
    let remaining = if qualified {
        Money::zero(Currency::CZK)
    } else {
        threshold - subtotal
    };
    let percent = if qualified {
        100.0
    } else {
        (subtotal.amount_minor as f64 / threshold.amount_minor as f64) * 100.0
    };
    FreeShippingProgress {
        remaining,
        percent,
        qualified,
    }
}

/// Cart-page pricing breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat estimate, zero once free shipping is reached.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
    /// Progress toward free shipping.
    pub free_shipping: FreeShippingProgress,
}

/// Compute the cart-page summary.
pub fn cart_summary(cart: &Cart) -> CartSummary {
    let subtotal = cart.total_price();
    let free_shipping = free_shipping_progress(subtotal);
    let shipping = if free_shipping.qualified {
        Money::zero(Currency::CZK)
    } else {
        flat_shipping()
    };
    CartSummary {
        subtotal,
        shipping,
        grand_total: subtotal + shipping,
        free_shipping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;

    #[test]
    fn test_empty_cart_progress() {
        let progress = free_shipping_progress(Money::from_crowns(0));
        assert!(!progress.qualified);
        assert_eq!(progress.remaining, Money::from_crowns(1000));
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_progress_below_threshold() {
        let progress = free_shipping_progress(Money::from_crowns(177));
        assert!(!progress.qualified);
        assert_eq!(progress.remaining, Money::from_crowns(823));
        assert!((progress.percent - 17.7).abs() < 0.01);
    }

    #[test]
    fn test_qualified_exactly_at_threshold() {
        let progress = free_shipping_progress(Money::from_crowns(1000));
        assert!(progress.qualified);
        assert!(progress.remaining.is_zero());
        assert_eq!(progress.percent, 100.0);
    }

    #[test]
    fn test_percent_capped_above_threshold() {
        let progress = free_shipping_progress(Money::from_crowns(2500));
        assert_eq!(progress.percent, 100.0);
        assert!(progress.remaining.is_zero());
    }

    #[test]
    fn test_cart_summary_flat_shipping() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 2);
        let summary = cart_summary(&cart);
        assert_eq!(summary.subtotal, Money::from_crowns(118));
        assert_eq!(summary.shipping, Money::from_crowns(50));
        assert_eq!(summary.grand_total, Money::from_crowns(168));
    }

    #[test]
    fn test_cart_summary_free_shipping() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 17); // 17 x 59 = 1003
        let summary = cart_summary(&cart);
        assert!(summary.free_shipping.qualified);
        assert!(summary.shipping.is_zero());
        assert_eq!(summary.grand_total, summary.subtotal);
    }
}
