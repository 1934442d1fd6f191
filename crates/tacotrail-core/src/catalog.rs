// Venue catalog - loaded once, read-only for the life of the process
use crate::{models::Venue, Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::info;

/// The catalog that ships with the app. Swapped out per festival week.
const BUILTIN_CATALOG: &str = include_str!("../data/venues.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    venue: Vec<Venue>,
}

/// Immutable collection of venues, validated on load.
///
/// Invariants enforced here so nothing downstream has to re-check them:
/// venue ids are unique, coordinates are within valid degree ranges.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Vec<Venue>,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)
            .map_err(|e| Error::CatalogError(format!("Failed to parse catalog: {}", e)))?;
        Self::new(file.venue)
    }

    /// Build a catalog from already-parsed venues, validating invariants
    pub fn new(venues: Vec<Venue>) -> Result<Self> {
        let mut seen = HashSet::new();
        for venue in &venues {
            if !seen.insert(venue.id.as_str()) {
                return Err(Error::CatalogError(format!(
                    "Duplicate venue id: {}",
                    venue.id
                )));
            }
            if !venue.coord().is_valid() {
                return Err(Error::CatalogError(format!(
                    "Venue {} has out-of-range coordinates: {}",
                    venue.id,
                    venue.coord()
                )));
            }
        }

        info!("Loaded catalog with {} venues", venues.len());
        Ok(Self { venues })
    }

    /// All venues in catalog order
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}
