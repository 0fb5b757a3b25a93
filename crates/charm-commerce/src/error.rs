//! Storefront error types.
//!
//! All errors here are form-validation conditions surfaced as user
//! messages; none are fatal and none propagate past the view that
//! triggered them.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Box delivery chosen but no pickup point selected.
    #[error("Prosím vyberte výdejní místo")]
    PickupPointRequired,

    /// Address delivery chosen with required fields blank.
    #[error("Prosím vyplňte všechny adresní údaje: {0}")]
    IncompleteAddress(String),

    /// Contact form submitted with a blank field.
    #[error("Prosím vyplňte všechna pole")]
    ContactFormIncomplete,
}

impl StoreError {
    /// The message shown to the user in a toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_address_names_fields() {
        let err = StoreError::IncompleteAddress("ulice, město".to_string());
        assert!(err.user_message().contains("ulice"));
    }
}
