// TUI application state and event handling
use ratatui::widgets::ListState;
use std::sync::Arc;
use tacotrail_core::models::Venue;
use tacotrail_core::VenueBrowser;
use tacotrail_maps::{links, LinkTarget, MapPresenter, UrlOpener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating the venue list
    Searching, // Typing in the search box
    Map,       // Keyboard focus on the map panel
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub browser: VenueBrowser,
    pub presenter: Box<dyn MapPresenter>,
    pub opener: Arc<dyn UrlOpener>,
    /// The filtered view currently on screen. Map markers and list cards
    /// are both derived from this, so they can't drift apart.
    pub visible: Vec<Venue>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(
        browser: VenueBrowser,
        presenter: Box<dyn MapPresenter>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            browser,
            presenter,
            opener,
            visible: Vec::new(),
            selected_index: 0,
            list_state,
            status_message: None,
            error_message: None,
        };
        app.refresh();
        app
    }

    /// Recompute the filtered view and push it into the map presenter.
    /// Called after every mutation so list and markers stay in sync.
    pub fn refresh(&mut self) {
        self.visible = self.browser.filtered();
        self.presenter.update(&self.visible);

        if self.visible.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_venue(&self) -> Option<&Venue> {
        self.visible.get(self.selected_index)
    }

    pub fn next_venue(&mut self) {
        if !self.visible.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.visible.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_venue(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    // -- search input ------------------------------------------------

    pub fn search_text(&self) -> &str {
        &self.browser.criteria().search
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.browser.criteria().search.clone();
        text.push(c);
        self.browser.set_search_text(text);
        self.refresh();
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.browser.criteria().search.clone();
        text.pop();
        self.browser.set_search_text(text);
        self.refresh();
    }

    // -- filter toggles ----------------------------------------------

    pub fn toggle_vegetarian(&mut self) {
        self.browser.toggle_vegetarian();
        self.refresh();
    }

    pub fn toggle_vegan(&mut self) {
        self.browser.toggle_vegan();
        self.refresh();
    }

    pub fn toggle_gluten_free(&mut self) {
        self.browser.toggle_gluten_free();
        self.refresh();
    }

    pub fn toggle_favorites_only(&mut self) {
        self.browser.toggle_favorites_only();
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.browser.clear_filters();
        self.status_message = Some("Filters cleared".to_string());
        self.refresh();
    }

    // -- card actions ------------------------------------------------

    pub fn toggle_favorite_selected(&mut self) {
        let Some(venue) = self.selected_venue() else {
            return;
        };
        let id = venue.id.clone();
        let name = venue.name.clone();

        if self.browser.toggle_favorite(&id) {
            self.status_message = Some(format!("Added {} to favorites", name));
        } else {
            self.status_message = Some(format!("Removed {} from favorites", name));
        }
        // favorites-only mode means the view itself may have changed
        self.refresh();
    }

    /// Open a directions deep link for the selected venue
    pub fn open_directions_selected(&mut self) {
        let Some(venue) = self.selected_venue() else {
            self.status_message = Some("No venue selected".to_string());
            return;
        };

        let url = links::directions_url(&venue.name, venue.coord(), LinkTarget::Web);
        let name = venue.name.clone();
        match self.opener.open(&url) {
            Ok(()) => self.status_message = Some(format!("Opening directions to {}", name)),
            Err(e) => self.error_message = Some(format!("Failed to open directions: {}", e)),
        }
    }

    /// Open the selected venue's website, when it has one
    pub fn open_website_selected(&mut self) {
        let Some(venue) = self.selected_venue() else {
            return;
        };
        let Some(website) = venue.website.clone() else {
            self.status_message = Some("No website listed for this venue".to_string());
            return;
        };

        match self.opener.open(&website) {
            Ok(()) => self.status_message = Some(format!("Opening {}", website)),
            Err(e) => self.error_message = Some(format!("Failed to open website: {}", e)),
        }
    }

    /// "Tap" the marker matching the current selection
    pub fn tap_selected_marker(&mut self) {
        if let Err(e) = self.presenter.tap(self.selected_index) {
            self.error_message = Some(format!("Map tap failed: {}", e));
        }
    }

    pub fn open_map_overview(&mut self) {
        if let Err(e) = self.presenter.open_overview() {
            self.error_message = Some(format!("Failed to open full map: {}", e));
        }
    }

    /// Called when the marker tap callback reports a venue
    pub fn select_by_id(&mut self, id: &str) {
        if let Some(index) = self.visible.iter().position(|v| v.id == id) {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
        self.browser.select(Some(id.to_string()));
        if let Some(venue) = self.browser.venue(id) {
            self.status_message = Some(format!("Selected {}", venue.name));
        }
    }

    // -- mode switches -----------------------------------------------

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_map_mode(&mut self) {
        self.input_mode = InputMode::Map;
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tacotrail_core::config::MapConfig;
    use tacotrail_core::{Catalog, VenueBrowser};
    use tacotrail_maps::compose;

    /// Swallows every URL so tests never launch a browser
    struct NullOpener;

    impl UrlOpener for NullOpener {
        fn open(&self, _url: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn test_app() -> (App, mpsc::Receiver<String>) {
        let browser = VenueBrowser::new(Catalog::builtin().unwrap());
        let (tx, rx) = mpsc::channel();
        let on_tap = Box::new(move |venue: &Venue| {
            let _ = tx.send(venue.id.clone());
        });
        let opener: Arc<dyn UrlOpener> = Arc::new(NullOpener);
        let presenter = compose(&MapConfig::default(), on_tap, opener.clone());
        (App::new(browser, presenter, opener), rx)
    }

    #[test]
    fn test_starts_with_full_catalog_visible() {
        let (app, _rx) = test_app();
        assert_eq!(app.visible.len(), app.browser.catalog().len());
        assert_eq!(app.presenter.marker_count(), app.visible.len());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_search_keystrokes_filter_live() {
        let (mut app, _rx) = test_app();
        for c in "mamacita".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.visible.len(), 2);
        assert_eq!(app.presenter.marker_count(), 2);

        app.pop_search_char();
        assert_eq!(app.search_text(), "mamacit");
    }

    #[test]
    fn test_selection_clamps_when_view_shrinks() {
        let (mut app, _rx) = test_app();
        for _ in 0..app.visible.len() {
            app.next_venue();
        }
        assert_eq!(app.selected_index, app.visible.len() - 1);

        for c in "mamacita".chars() {
            app.push_search_char(c);
        }
        assert!(app.selected_index < app.visible.len());
    }

    #[test]
    fn test_empty_view_is_a_valid_state() {
        let (mut app, _rx) = test_app();
        for c in "no such taco anywhere".chars() {
            app.push_search_char(c);
        }
        assert!(app.visible.is_empty());
        assert_eq!(app.presenter.marker_count(), 0);
        assert!(app.selected_venue().is_none());

        // none of these may panic on an empty view
        app.next_venue();
        app.previous_venue();
        app.tap_selected_marker();
        app.toggle_favorite_selected();
    }

    #[test]
    fn test_favorite_toggle_updates_status() {
        let (mut app, _rx) = test_app();
        app.toggle_favorite_selected();
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Added"));
        assert!(app.browser.favorites().len() == 1);

        app.toggle_favorite_selected();
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Removed"));
        assert!(app.browser.favorites().is_empty());
    }

    #[test]
    fn test_marker_tap_round_trip() {
        let (mut app, rx) = test_app();
        app.next_venue();
        app.tap_selected_marker();

        let tapped = rx.try_recv().unwrap();
        assert_eq!(tapped, app.visible[1].id);

        app.select_by_id(&tapped);
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.browser.selected_venue().unwrap().id, tapped);
    }
}
