//! Shipping options and delivery modes.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How a shipping option delivers the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// Courier delivery to a customer address.
    Address,
    /// Delivery to a pickup box or branch.
    Box,
}

/// The five fixed shipping options.
///
/// Checkout charges the option's carrier price as-is; the cart-page
/// free-shipping threshold does not apply here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingOption {
    /// Balíkovna na adresu.
    BalikovnaAddress,
    /// Balíkovna do Balíkovny.
    BalikovnaBox,
    /// Zásilkovna na adresu.
    ZasilkovnaAddress,
    /// Zásilkovna do Z-Boxu.
    ZasilkovnaBox,
    /// Alza do AlzaBoxu.
    AlzaBox,
}

impl ShippingOption {
    /// Every option, in display order.
    pub const ALL: [ShippingOption; 5] = [
        ShippingOption::BalikovnaAddress,
        ShippingOption::BalikovnaBox,
        ShippingOption::ZasilkovnaAddress,
        ShippingOption::ZasilkovnaBox,
        ShippingOption::AlzaBox,
    ];

    /// Stable string id, e.g. for DOM element ids.
    pub fn id(&self) -> &'static str {
        match self {
            ShippingOption::BalikovnaAddress => "balikovna-address",
            ShippingOption::BalikovnaBox => "balikovna-box",
            ShippingOption::ZasilkovnaAddress => "zasilkovna-address",
            ShippingOption::ZasilkovnaBox => "zasilkovna-box",
            ShippingOption::AlzaBox => "alza-box",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ShippingOption::BalikovnaAddress => "Balíkovna na adresu",
            ShippingOption::BalikovnaBox => "Balíkovna do Balíkovny",
            ShippingOption::ZasilkovnaAddress => "Zásilkovna na adresu",
            ShippingOption::ZasilkovnaBox => "Zásilkovna do Z-Boxu",
            ShippingOption::AlzaBox => "Alza do AlzaBoxu",
        }
    }

    /// Fixed carrier price.
    pub fn price(&self) -> Money {
        let crowns = match self {
            ShippingOption::BalikovnaAddress => 105,
            ShippingOption::BalikovnaBox => 50,
            ShippingOption::ZasilkovnaAddress => 129,
            ShippingOption::ZasilkovnaBox => 89,
            ShippingOption::AlzaBox => 50,
        };
        Money::from_crowns(crowns)
    }

    /// Delivery mode of this option.
    pub fn mode(&self) -> DeliveryMode {
        match self {
            ShippingOption::BalikovnaAddress | ShippingOption::ZasilkovnaAddress => {
                DeliveryMode::Address
            }
            ShippingOption::BalikovnaBox
            | ShippingOption::ZasilkovnaBox
            | ShippingOption::AlzaBox => DeliveryMode::Box,
        }
    }

    /// Service glyph shown next to the carrier.
    pub fn service_icon(&self) -> &'static str {
        match self {
            ShippingOption::BalikovnaAddress | ShippingOption::BalikovnaBox => "\u{1f4e6}",
            ShippingOption::ZasilkovnaAddress | ShippingOption::ZasilkovnaBox => "\u{1f4ee}",
            ShippingOption::AlzaBox => "\u{1f7e2}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices() {
        assert_eq!(ShippingOption::BalikovnaAddress.price(), Money::from_crowns(105));
        assert_eq!(ShippingOption::BalikovnaBox.price(), Money::from_crowns(50));
        assert_eq!(ShippingOption::ZasilkovnaAddress.price(), Money::from_crowns(129));
        assert_eq!(ShippingOption::ZasilkovnaBox.price(), Money::from_crowns(89));
        assert_eq!(ShippingOption::AlzaBox.price(), Money::from_crowns(50));
    }

    #[test]
    fn test_modes() {
        assert_eq!(ShippingOption::BalikovnaAddress.mode(), DeliveryMode::Address);
        assert_eq!(ShippingOption::ZasilkovnaAddress.mode(), DeliveryMode::Address);
        assert_eq!(ShippingOption::BalikovnaBox.mode(), DeliveryMode::Box);
        assert_eq!(ShippingOption::ZasilkovnaBox.mode(), DeliveryMode::Box);
        assert_eq!(ShippingOption::AlzaBox.mode(), DeliveryMode::Box);
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut ids: Vec<_> = ShippingOption::ALL.iter().map(|o| o.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ShippingOption::ALL.len());
    }
}
