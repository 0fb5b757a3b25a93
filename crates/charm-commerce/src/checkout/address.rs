//! Delivery address form data.

use serde::{Deserialize, Serialize};

/// Free-text delivery address for courier shipping options.
///
/// Only presence is checked; there is no format validation. The house
/// number is optional, matching the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Street name.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// House number.
    pub house_number: String,
}

impl DeliveryAddress {
    /// Create an empty address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all required fields are filled.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Czech names of the required fields still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.street.trim().is_empty() {
            missing.push("ulice");
        }
        if self.city.trim().is_empty() {
            missing.push("město");
        }
        if self.postal_code.trim().is_empty() {
            missing.push("PSČ");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_is_incomplete() {
        let addr = DeliveryAddress::new();
        assert!(!addr.is_complete());
        assert_eq!(addr.missing_fields(), vec!["ulice", "město", "PSČ"]);
    }

    #[test]
    fn test_house_number_not_required() {
        let addr = DeliveryAddress {
            street: "Václavské náměstí".to_string(),
            city: "Praha".to_string(),
            postal_code: "110 00".to_string(),
            house_number: String::new(),
        };
        assert!(addr.is_complete());
    }

    #[test]
    fn test_blank_field_reported() {
        let addr = DeliveryAddress {
            street: "Slovenská".to_string(),
            city: "  ".to_string(),
            postal_code: "101 00".to_string(),
            house_number: "5".to_string(),
        };
        assert_eq!(addr.missing_fields(), vec!["město"]);
    }
}
