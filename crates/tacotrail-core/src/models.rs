use serde::{Deserialize, Serialize};

/// Shown on a venue card when a venue hasn't announced its taco yet.
pub const FEATURED_ITEM_FALLBACK: &str = "Check back later";

/// Venue model - the star of the show
///
/// One record per participating restaurant or festival stand. Loaded once
/// from the catalog at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// This week's special, when the venue has announced one.
    #[serde(default)]
    pub featured_item: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub dietary: DietaryFlags,
}

impl Venue {
    pub fn coord(&self) -> Coord {
        Coord {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Featured item text with the defined fallback for venues that
    /// haven't announced one yet.
    pub fn featured_item_display(&self) -> &str {
        self.featured_item.as_deref().unwrap_or(FEATURED_ITEM_FALLBACK)
    }
}

/// Dietary coverage for a venue's menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFlags {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
}

/// A point on the map, decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in [-90, 90], longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_validity() {
        assert!(Coord::new(35.0456, -85.3097).is_valid());
        assert!(Coord::new(-90.0, 180.0).is_valid());
        assert!(!Coord::new(90.1, 0.0).is_valid());
        assert!(!Coord::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_coord_display() {
        let coord = Coord::new(35.0456, -85.3097);
        assert_eq!(coord.to_string(), "35.0456,-85.3097");
    }

    #[test]
    fn test_featured_item_fallback() {
        let venue = Venue {
            id: "1".to_string(),
            name: "Taco Libre".to_string(),
            address: "123 Main St".to_string(),
            latitude: 35.0,
            longitude: -85.0,
            description: None,
            featured_item: None,
            website: None,
            ingredients: Vec::new(),
            specialties: Vec::new(),
            dietary: DietaryFlags::default(),
        };
        assert_eq!(venue.featured_item_display(), FEATURED_ITEM_FALLBACK);

        let venue = Venue {
            featured_item: Some("Al Pastor Taco".to_string()),
            ..venue
        };
        assert_eq!(venue.featured_item_display(), "Al Pastor Taco");
    }
}
