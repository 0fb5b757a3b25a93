//! Checkout flow state.
//!
//! Tracks the chosen shipping option, the pickup point selector, and
//! the delivery address, and validates the continue action.

use crate::cart::Cart;
use crate::checkout::{sorted_points, DeliveryAddress, DeliveryMode, PickupPoint, ShippingOption, SortMode};
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Checkout-page pricing breakdown, priced by the selected carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Sum of cart line totals.
    pub subtotal: Money,
    /// The selected shipping option's price.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

/// State of the checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Chosen shipping option.
    pub shipping: ShippingOption,
    /// Delivery address, used by address-mode options.
    pub address: DeliveryAddress,
    /// Free-text pickup search query.
    pub search_query: String,
    /// Whether pickup results are visible. The query gates visibility
    /// only; it never filters the static list.
    pub results_shown: bool,
    /// Ordering of the pickup list.
    pub sort: SortMode,
    /// Selected pickup point id.
    pub selected_point: Option<String>,
    /// Hovered pickup point id, tracked independently of selection.
    pub hovered_point: Option<String>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self {
            shipping: ShippingOption::BalikovnaBox,
            address: DeliveryAddress::new(),
            search_query: String::new(),
            results_shown: false,
            sort: SortMode::Nearest,
            selected_point: None,
            hovered_point: None,
        }
    }
}

impl Checkout {
    /// Create the initial checkout state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the shipping option.
    ///
    /// Resets the pickup results and any selected point; the previous
    /// selection belongs to the previous carrier.
    pub fn set_shipping(&mut self, option: ShippingOption) {
        self.shipping = option;
        self.results_shown = false;
        self.selected_point = None;
    }

    /// Submit the pickup search. A non-blank query reveals the results;
    /// a blank one does nothing.
    pub fn submit_search(&mut self) {
        if !self.search_query.trim().is_empty() {
            self.results_shown = true;
        }
    }

    /// Select a pickup point.
    pub fn select_point(&mut self, id: &str) {
        self.selected_point = Some(id.to_string());
    }

    /// Set or clear the hovered pickup point.
    pub fn set_hovered(&mut self, id: Option<&str>) {
        self.hovered_point = id.map(str::to_string);
    }

    /// Whether the given point is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_point.as_deref() == Some(id)
    }

    /// Whether the given point is hovered.
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered_point.as_deref() == Some(id)
    }

    /// The pickup points in the currently requested order.
    pub fn visible_points(&self) -> Vec<&'static PickupPoint> {
        sorted_points(self.sort)
    }

    /// Validate the continue action.
    ///
    /// Box delivery requires a selected pickup point; address delivery
    /// requires street, city, and postal code.
    pub fn validate(&self) -> Result<(), StoreError> {
        match self.shipping.mode() {
            DeliveryMode::Box => {
                if self.selected_point.is_none() {
                    return Err(StoreError::PickupPointRequired);
                }
            }
            DeliveryMode::Address => {
                let missing = self.address.missing_fields();
                if !missing.is_empty() {
                    return Err(StoreError::IncompleteAddress(missing.join(", ")));
                }
            }
        }
        Ok(())
    }

    /// Checkout-page totals for the given cart.
    ///
    /// Uses the selected carrier's price; the cart-page free-shipping
    /// threshold deliberately does not apply here.
    pub fn summary(&self, cart: &Cart) -> CheckoutSummary {
        let subtotal = cart.total_price();
        let shipping = self.shipping.price();
        CheckoutSummary {
            subtotal,
            shipping,
            grand_total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;

    #[test]
    fn test_default_state() {
        let checkout = Checkout::new();
        assert_eq!(checkout.shipping, ShippingOption::BalikovnaBox);
        assert_eq!(checkout.sort, SortMode::Nearest);
        assert!(!checkout.results_shown);
        assert!(checkout.selected_point.is_none());
    }

    #[test]
    fn test_switching_shipping_resets_selection() {
        let mut checkout = Checkout::new();
        checkout.search_query = "Praha".to_string();
        checkout.submit_search();
        checkout.select_point("1");
        assert!(checkout.results_shown);

        checkout.set_shipping(ShippingOption::ZasilkovnaBox);
        assert!(!checkout.results_shown);
        assert!(checkout.selected_point.is_none());
    }

    #[test]
    fn test_blank_search_keeps_results_hidden() {
        let mut checkout = Checkout::new();
        checkout.search_query = "   ".to_string();
        checkout.submit_search();
        assert!(!checkout.results_shown);
    }

    #[test]
    fn test_hover_and_selection_are_independent() {
        let mut checkout = Checkout::new();
        checkout.select_point("1");
        checkout.set_hovered(Some("2"));
        assert!(checkout.is_selected("1"));
        assert!(checkout.is_hovered("2"));

        checkout.set_hovered(None);
        assert!(checkout.is_selected("1"));
        assert!(!checkout.is_hovered("2"));
    }

    #[test]
    fn test_box_mode_requires_pickup_point() {
        let mut checkout = Checkout::new();
        assert_eq!(checkout.validate(), Err(StoreError::PickupPointRequired));

        checkout.select_point("1");
        assert!(checkout.validate().is_ok());
    }

    #[test]
    fn test_address_mode_requires_address_fields() {
        let mut checkout = Checkout::new();
        checkout.set_shipping(ShippingOption::BalikovnaAddress);
        let err = checkout.validate().unwrap_err();
        assert!(matches!(err, StoreError::IncompleteAddress(_)));

        checkout.address.street = "Slovenská".to_string();
        checkout.address.city = "Praha".to_string();
        checkout.address.postal_code = "101 00".to_string();
        assert!(checkout.validate().is_ok());
    }

    #[test]
    fn test_summary_uses_carrier_price() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 2);
        let checkout = Checkout::new();
        let summary = checkout.summary(&cart);
        assert_eq!(summary.subtotal, Money::from_crowns(118));
        assert_eq!(summary.shipping, Money::from_crowns(50));
        assert_eq!(summary.grand_total, Money::from_crowns(168));
    }
}
