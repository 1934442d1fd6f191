// The view-model that owns all mutable discovery state
//
// Search text, filter toggles, favorites, and selection live here and
// nowhere else. Everything is mutated through these entry points on the
// UI thread, so each state transition is atomic as far as any view is
// concerned.
use crate::{
    catalog::Catalog,
    favorites::FavoriteSet,
    filter::{filter, FilterCriteria},
    models::Venue,
};

pub struct VenueBrowser {
    catalog: Catalog,
    criteria: FilterCriteria,
    favorites: FavoriteSet,
    selected: Option<String>,
}

impl VenueBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            favorites: FavoriteSet::new(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// The current filtered view, recomputed from scratch on every call.
    /// Order always follows the catalog.
    pub fn filtered(&self) -> Vec<Venue> {
        filter(self.catalog.venues(), &self.criteria, &self.favorites)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    pub fn toggle_vegetarian(&mut self) {
        self.criteria.vegetarian = !self.criteria.vegetarian;
    }

    pub fn toggle_vegan(&mut self) {
        self.criteria.vegan = !self.criteria.vegan;
    }

    pub fn toggle_gluten_free(&mut self) {
        self.criteria.gluten_free = !self.criteria.gluten_free;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.criteria.favorites_only = !self.criteria.favorites_only;
    }

    /// Drop all criteria, keeping favorites themselves intact
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Toggle a venue in the favorites set. Returns whether it is
    /// favorited afterwards.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    pub fn selected_venue(&self) -> Option<&Venue> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.catalog.get(id)
    }
}
