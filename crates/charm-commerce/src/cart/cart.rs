//! Cart and cart line types.

use crate::catalog::{unit_price, Variant};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One cart entry pairing a variant with a quantity.
///
/// A line only exists while its quantity is >= 1; the cart removes the
/// line instead of storing zero or negative quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product variant.
    pub variant: Variant,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Line total (quantity x unit price).
    pub fn line_total(&self) -> Money {
        unit_price().saturating_multiply(self.quantity)
    }
}

/// The shopping cart: at most one line per variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a variant.
    ///
    /// Increments the existing line if present, otherwise inserts a new
    /// one. Quantities <= 0 are ignored; repeated adds saturate rather
    /// than overflow.
    pub fn add_item(&mut self, variant: Variant, quantity: i64) {
        if quantity <= 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.variant == variant) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { variant, quantity });
        }
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// A quantity <= 0 removes the line. Updating a variant that has no
    /// line is a no-op; this never inserts.
    pub fn set_quantity(&mut self, variant: Variant, quantity: i64) {
        if quantity <= 0 {
            self.remove(&variant);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.variant == variant) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a variant, returning whether one was present.
    pub fn remove(&mut self, variant: &Variant) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.variant != *variant);
        self.lines.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Subtotal across all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::from_crowns(0), |acc, line| {
                acc.try_add(&line.line_total()).unwrap_or(acc)
            })
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a variant.
    pub fn get(&self, variant: &Variant) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.variant == *variant)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Toast text for a successful add, naming product, quantity, and
    /// the fixed unit price.
    pub fn added_message(variant: Variant, quantity: i64) -> String {
        format!(
            "{} ({}× {}) přidán do košíku!",
            variant.info().name,
            quantity,
            unit_price().display()
        )
    }

    /// Toast text for a removal, emitted whether or not a line existed.
    pub fn removed_message() -> &'static str {
        "Produkt odebrán z košíku"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_price(), Money::from_crowns(118));
    }

    #[test]
    fn test_add_same_variant_accumulates() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 1);
        cart.add_item(Variant::Fox, 2);
        cart.add_item(Variant::Fox, 3);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(&Variant::Fox).unwrap().quantity, 6);
    }

    #[test]
    fn test_add_nonpositive_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 0);
        cart.add_item(Variant::Dog, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 1);
        cart.set_quantity(Variant::Fox, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 3);
        cart.set_quantity(Variant::Fox, 0);
        assert!(cart.get(&Variant::Fox).is_none());
    }

    #[test]
    fn test_set_quantity_absent_variant_never_inserts() {
        let mut cart = Cart::new();
        cart.set_quantity(Variant::Dog, 4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 1);
        assert!(cart.remove(&Variant::Fox));
        assert!(!cart.remove(&Variant::Fox));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_two_lines() {
        let mut cart = Cart::new();
        cart.add_item(Variant::Fox, 2);
        cart.add_item(Variant::Dog, 1);
        assert_eq!(cart.total_price(), Money::from_crowns(177));
    }

    #[test]
    fn test_added_message_names_product_and_price() {
        let msg = Cart::added_message(Variant::Fox, 2);
        assert!(msg.contains("Přívěsek Liška"));
        assert!(msg.contains("2× 59 Kč"));
    }
}
