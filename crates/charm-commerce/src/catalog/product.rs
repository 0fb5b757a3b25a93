//! Product variants and their immutable display data.
//!
//! The catalog is a closed set: every sellable product is a `Variant`
//! value, and lookups go through exhaustive `match` instead of string
//! keys. Display data lives in `static` tables built at compile time.

use crate::catalog::Review;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit price shared by every product in the catalog, in crowns.
pub const UNIT_PRICE_CROWNS: i64 = 59;

/// The fixed unit price as a `Money` value.
pub fn unit_price() -> Money {
    Money::from_crowns(UNIT_PRICE_CROWNS)
}

/// A sellable product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Přívěsek Liška (Tri-Color).
    Fox,
    /// Přívěsek Pes (Německý ovčák).
    Dog,
}

/// Immutable display data for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductInfo {
    /// Display name.
    pub name: &'static str,
    /// Short subtitle shown under the name.
    pub subtitle: &'static str,
    /// Full name with subtitle, used on the detail page and breadcrumb.
    pub full_name: &'static str,
    /// Marketing description.
    pub description: &'static str,
    /// Available print colors.
    pub colors: &'static str,
    /// Ordered gallery images; the first is the primary image.
    pub images: &'static [&'static str],
    /// Ordered customer reviews.
    pub reviews: &'static [Review],
}

static FOX: ProductInfo = ProductInfo {
    name: "Přívěsek Liška",
    subtitle: "Tri-Color",
    full_name: "Přívěsek Liška (Tri-Color)",
    description: "Ikonický liščí design s výraznými barvami, tištěný moderní 3D \
                  technologií. Lehký a detailní přívěsek. Ideální pro klíče nebo batoh.",
    colors: "Žlutá, červená, černá, bílá",
    images: &[
        "/images/liska-v-lese.png",
        "/images/liska-klice.png",
        "/images/liska-detail.png",
        "/images/liska-v-lese.png",
    ],
    reviews: &[
        Review {
            author: "Anna K.",
            rating: 5,
            text: "Perfektní kvalita! Přívěsek je lehký, barvy jsou naprosto živé a \
                   detaily jsou neuvěřitelné. Nosím ho na batohu už měsíc a vypadá \
                   stále jako nový.",
            date: "15. 2. 2025",
        },
        Review {
            author: "Lucie S.",
            rating: 4,
            text: "Velmi roztomilý design a skvělé zpracování. Za 59 Kč naprosto super!",
            date: "5. 2. 2025",
        },
        Review {
            author: "Martin V.",
            rating: 5,
            text: "Jsem překvapený kvalitou 3D tisku. Detaily jsou precizní a materiál \
                   je opravdu odolný.",
            date: "1. 2. 2025",
        },
    ],
};

static DOG: ProductInfo = ProductInfo {
    name: "Přívěsek Pes",
    subtitle: "Německý ovčák",
    full_name: "Přívěsek Pes (Německý ovčák)",
    description: "Oblíbený motiv psa, tištěný na 3D tiskárně. Lehký a detailní \
                  přívěsek. Ideální pro klíče nebo batoh. Skvělý dárek pro milovníky psů.",
    colors: "Černá, bílá",
    images: &[
        "/images/pes-vanoce.png",
        "/images/pes-batoh.png",
        "/images/pes-dvere.png",
        "/images/pes-vanoce.png",
    ],
    reviews: &[
        Review {
            author: "Petr M.",
            rating: 5,
            text: "Koupil jsem jako dárek pro dceru a byla nadšená! Materiál je opravdu \
                   kvalitní a odolný. Rozhodně doporučuji.",
            date: "10. 2. 2025",
        },
        Review {
            author: "Jana K.",
            rating: 5,
            text: "Mám německého ovčáka a tento přívěsek je prostě dokonalý! Přesně \
                   zachycuje tu podobu.",
            date: "8. 2. 2025",
        },
        Review {
            author: "Tomáš B.",
            rating: 5,
            text: "Super cena, super kvalita. Koupil jsem si hned dva!",
            date: "3. 2. 2025",
        },
    ],
};

impl Variant {
    /// Every variant in the catalog, in display order.
    pub const ALL: [Variant; 2] = [Variant::Fox, Variant::Dog];

    /// Stable string key, e.g. for DOM ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Variant::Fox => "fox",
            Variant::Dog => "dog",
        }
    }

    /// Display data for this variant.
    pub fn info(&self) -> &'static ProductInfo {
        match self {
            Variant::Fox => &FOX,
            Variant::Dog => &DOG,
        }
    }

    /// The other variant, shown as the related product.
    pub fn other(&self) -> Variant {
        match self {
            Variant::Fox => Variant::Dog,
            Variant::Dog => Variant::Fox,
        }
    }

    /// Primary gallery image.
    pub fn primary_image(&self) -> &'static str {
        self.info().images[0]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_is_59_czk() {
        assert_eq!(unit_price(), Money::from_crowns(59));
    }

    #[test]
    fn test_variant_lookup() {
        assert_eq!(Variant::Fox.info().name, "Přívěsek Liška");
        assert_eq!(Variant::Dog.info().subtitle, "Německý ovčák");
    }

    #[test]
    fn test_other_variant_is_involution() {
        for variant in Variant::ALL {
            assert_eq!(variant.other().other(), variant);
            assert_ne!(variant.other(), variant);
        }
    }

    #[test]
    fn test_every_variant_has_gallery_and_reviews() {
        for variant in Variant::ALL {
            assert!(!variant.info().images.is_empty());
            assert_eq!(variant.info().reviews.len(), 3);
        }
    }
}
