//! Pickup points for box delivery.
//!
//! The point list is static; no geocoding happens. The search box on
//! the checkout page only reveals the list, it does not filter it.

use serde::{Deserialize, Serialize};

/// A pickup location usable for box delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Street address.
    pub address: &'static str,
    /// Display distance, e.g. "0.5 km".
    pub distance: &'static str,
    /// Marker position on the map image, CSS top percentage.
    pub map_top: &'static str,
    /// Marker position on the map image, CSS left percentage.
    pub map_left: &'static str,
}

impl PickupPoint {
    /// Numeric kilometre value parsed from the distance field.
    ///
    /// Unparseable distances sort last under `SortMode::Nearest`.
    pub fn distance_km(&self) -> f64 {
        self.distance
            .split_whitespace()
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(f64::MAX)
    }
}

/// The static pickup point list, in declaration order.
pub static PICKUP_POINTS: [PickupPoint; 3] = [
    PickupPoint {
        id: "1",
        name: "P10 - Vinohrady - Slovenská (TJ Bohemians)",
        address: "Slovenská 222/5, 10100 Praha 10",
        distance: "0.5 km",
        map_top: "25%",
        map_left: "35%",
    },
    PickupPoint {
        id: "2",
        name: "P1 - Václavské náměstí - Metro Muzeum",
        address: "Václavské náměstí 56, 11000 Praha 1",
        distance: "1.2 km",
        map_top: "50%",
        map_left: "50%",
    },
    PickupPoint {
        id: "3",
        name: "P2 - Karlovo náměstí - Novoměstská radnice",
        address: "Karlovo náměstí 23, 12000 Praha 2",
        distance: "1.8 km",
        map_top: "65%",
        map_left: "65%",
    },
];

/// Ordering applied to the pickup point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Ascending by numeric distance.
    #[default]
    Nearest,
    /// Static declaration order.
    List,
}

/// The pickup points in the order requested.
pub fn sorted_points(sort: SortMode) -> Vec<&'static PickupPoint> {
    let mut points: Vec<&'static PickupPoint> = PICKUP_POINTS.iter().collect();
    if sort == SortMode::Nearest {
        points.sort_by(|a, b| {
            a.distance_km()
                .partial_cmp(&b.distance_km())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    points
}

/// Look up a point by id.
pub fn find_point(id: &str) -> Option<&'static PickupPoint> {
    PICKUP_POINTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_parsing() {
        assert!((PICKUP_POINTS[0].distance_km() - 0.5).abs() < f64::EPSILON);
        assert!((PICKUP_POINTS[2].distance_km() - 1.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nearest_sort_is_nondecreasing() {
        let points = sorted_points(SortMode::Nearest);
        for pair in points.windows(2) {
            assert!(pair[0].distance_km() <= pair[1].distance_km());
        }
    }

    #[test]
    fn test_list_sort_preserves_declaration_order() {
        let points = sorted_points(SortMode::List);
        let ids: Vec<_> = points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_find_point() {
        assert_eq!(find_point("2").unwrap().address, "Václavské náměstí 56, 11000 Praha 1");
        assert!(find_point("missing").is_none());
    }
}
