// The filter engine - a pure function over the catalog
//
// Cheap enough to re-run on every keystroke, so there's no incremental
// state to get out of sync.
use crate::{favorites::FavoriteSet, models::Venue};

/// Everything the user can narrow the catalog by.
///
/// Union of search text, dietary toggles, and favorites-only mode.
/// Derived from UI state and recomputed on every change, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub favorites_only: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
}

impl FilterCriteria {
    /// True when the criteria would pass the whole catalog through
    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none()
            && !self.favorites_only
            && !self.vegetarian
            && !self.vegan
            && !self.gluten_free
    }

    /// Number of active toggles, for the filter chips in the UI
    pub fn active_toggles(&self) -> usize {
        [
            self.favorites_only,
            self.vegetarian,
            self.vegan,
            self.gluten_free,
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }

    /// Normalized search text: trimmed and lowercased, None when there's
    /// nothing to search for (whitespace-only input is not a filter).
    fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Apply the criteria to the catalog, preserving catalog order.
///
/// All active criteria must hold (AND); the search text matches if any
/// searchable field contains it (OR). Empty criteria is the identity.
pub fn filter(catalog: &[Venue], criteria: &FilterCriteria, favorites: &FavoriteSet) -> Vec<Venue> {
    let needle = criteria.search_needle();

    catalog
        .iter()
        .filter(|venue| {
            if criteria.favorites_only && !favorites.is_favorite(&venue.id) {
                return false;
            }
            if criteria.vegetarian && !venue.dietary.vegetarian {
                return false;
            }
            if criteria.vegan && !venue.dietary.vegan {
                return false;
            }
            if criteria.gluten_free && !venue.dietary.gluten_free {
                return false;
            }
            match &needle {
                Some(needle) => matches_search(venue, needle),
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match across the searchable fields
fn matches_search(venue: &Venue, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&venue.name)
        || contains(&venue.address)
        || venue.description.as_deref().is_some_and(|d| contains(d))
        || venue.featured_item.as_deref().is_some_and(|f| contains(f))
        || venue.ingredients.iter().any(|i| contains(i))
        || venue.specialties.iter().any(|s| contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietaryFlags;

    fn test_venue(id: &str, name: &str) -> Venue {
        Venue {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{} Main St, Chattanooga, TN", id),
            latitude: 35.0456,
            longitude: -85.3097,
            description: None,
            featured_item: None,
            website: None,
            ingredients: Vec::new(),
            specialties: Vec::new(),
            dietary: DietaryFlags::default(),
        }
    }

    fn test_catalog() -> Vec<Venue> {
        vec![
            Venue {
                description: Some("Fresh ingredients and creative taco combinations".to_string()),
                dietary: DietaryFlags {
                    vegetarian: true,
                    vegan: false,
                    gluten_free: true,
                },
                ..test_venue("1", "Taco Mamacita (Northshore)")
            },
            Venue {
                description: Some("Local taco joint with authentic flavors".to_string()),
                ingredients: vec!["pork".to_string(), "pineapple".to_string()],
                specialties: vec!["Al Pastor".to_string()],
                ..test_venue("2", "423 Taco")
            },
            Venue {
                description: Some("Plant-based Mexican fusion".to_string()),
                ingredients: vec!["black beans".to_string(), "mushrooms".to_string()],
                specialties: vec!["Jackfruit Carnitas".to_string()],
                dietary: DietaryFlags {
                    vegetarian: true,
                    vegan: true,
                    gluten_free: true,
                },
                ..test_venue("3", "Veggie Vibes")
            },
            Venue {
                description: Some("Craft brewery".to_string()),
                ..test_venue("4", "Five Wits Brewing Co.")
            },
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let catalog = test_catalog();
        let result = filter(&catalog, &FilterCriteria::default(), &FavoriteSet::new());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_whitespace_search_is_identity() {
        let catalog = test_catalog();
        let criteria = FilterCriteria {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&catalog, &criteria, &FavoriteSet::new()), catalog);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = test_catalog();
        let upper = FilterCriteria {
            search: "TACO".to_string(),
            ..Default::default()
        };
        let lower = FilterCriteria {
            search: "taco".to_string(),
            ..Default::default()
        };
        let favorites = FavoriteSet::new();
        assert_eq!(
            filter(&catalog, &upper, &favorites),
            filter(&catalog, &lower, &favorites)
        );
    }

    #[test]
    fn test_search_matches_name_substring() {
        let catalog = test_catalog();
        let criteria = FilterCriteria {
            search: "mamacita".to_string(),
            ..Default::default()
        };
        let result = filter(&catalog, &criteria, &FavoriteSet::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Taco Mamacita (Northshore)");
    }

    #[test]
    fn test_search_matches_across_fields() {
        let catalog = test_catalog();
        let favorites = FavoriteSet::new();

        // "taco" appears in two names and two descriptions
        let criteria = FilterCriteria {
            search: "taco".to_string(),
            ..Default::default()
        };
        let names: Vec<_> = filter(&catalog, &criteria, &favorites)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(names, vec!["1", "2"]);

        // ingredient match
        let criteria = FilterCriteria {
            search: "pineapple".to_string(),
            ..Default::default()
        };
        let result = filter(&catalog, &criteria, &favorites);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");

        // specialty match
        let criteria = FilterCriteria {
            search: "jackfruit".to_string(),
            ..Default::default()
        };
        let result = filter(&catalog, &criteria, &favorites);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn test_dietary_toggles_are_anded() {
        let catalog = test_catalog();
        let favorites = FavoriteSet::new();

        let criteria = FilterCriteria {
            vegetarian: true,
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &criteria, &favorites)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let criteria = FilterCriteria {
            vegetarian: true,
            vegan: true,
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &criteria, &favorites)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_favorites_only_preserves_catalog_order() {
        let catalog = test_catalog();
        let mut favorites = FavoriteSet::new();
        // Toggle in reverse order; output order must still follow the catalog
        favorites.toggle("4");
        favorites.toggle("2");

        let criteria = FilterCriteria {
            favorites_only: true,
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &criteria, &favorites)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_search_and_toggles_combine() {
        let catalog = test_catalog();
        let mut favorites = FavoriteSet::new();
        favorites.toggle("1");
        favorites.toggle("3");

        let criteria = FilterCriteria {
            search: "taco".to_string(),
            favorites_only: true,
            ..Default::default()
        };
        let ids: Vec<_> = filter(&catalog, &criteria, &favorites)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let catalog = test_catalog();
        let mut favorites = FavoriteSet::new();
        favorites.toggle("2");
        let criteria = FilterCriteria {
            search: "taco".to_string(),
            favorites_only: true,
            ..Default::default()
        };

        let first = filter(&catalog, &criteria, &favorites);
        let second = filter(&catalog, &criteria, &favorites);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let criteria = FilterCriteria {
            search: "taco".to_string(),
            ..Default::default()
        };
        assert!(filter(&[], &criteria, &FavoriteSet::new()).is_empty());
        assert!(filter(&[], &FilterCriteria::default(), &FavoriteSet::new()).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_an_error() {
        let catalog = test_catalog();
        let criteria = FilterCriteria {
            search: "sushi".to_string(),
            ..Default::default()
        };
        assert!(filter(&catalog, &criteria, &FavoriteSet::new()).is_empty());
    }
}
