//! Customer review entries attached to catalog products.

use serde::{Deserialize, Serialize};

/// A customer review. Catalog reviews are static display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name.
    pub author: &'static str,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review text.
    pub text: &'static str,
    /// Display date.
    pub date: &'static str,
}

#[cfg(test)]
mod tests {
    use crate::catalog::Variant;

    #[test]
    fn test_ratings_in_range() {
        for variant in Variant::ALL {
            for review in variant.info().reviews {
                assert!((1..=5).contains(&review.rating));
            }
        }
    }
}
