// Embedded map backend - a static embed URL plus a numbered label strip
//
// The embed surface can't report marker taps back to us, so the strip
// entries stand in for the markers: "tapping" one opens the venue
// directly in an external map through the opener.
use crate::links::{self, LinkTarget};
use crate::opener::UrlOpener;
use crate::presenter::{MapPresenter, MapScene, StripEntry};
use std::sync::Arc;
use tacotrail_core::config::MapConfig;
use tacotrail_core::models::{Coord, Venue};
use tracing::debug;

pub struct EmbeddedMap {
    venues: Vec<Venue>,
    center: Coord,
    zoom: u8,
    embed_url: String,
    strip: Vec<StripEntry>,
    opener: Arc<dyn UrlOpener>,
    link_target: LinkTarget,
}

impl EmbeddedMap {
    pub fn new(config: &MapConfig, opener: Arc<dyn UrlOpener>, link_target: LinkTarget) -> Self {
        let center = config.center();
        let zoom = config.zoom;
        Self {
            venues: Vec::new(),
            center,
            zoom,
            embed_url: embed_url(center, zoom, &[]),
            strip: Vec::new(),
            opener,
            link_target,
        }
    }
}

/// Build the embed URL: fixed center, zoom, one numbered red marker per
/// venue in catalog order.
pub fn embed_url(center: Coord, zoom: u8, venues: &[Venue]) -> String {
    let mut url = format!(
        "https://maps.google.com/maps?q={}&z={}&output=embed",
        center, zoom
    );
    for (index, venue) in venues.iter().enumerate() {
        url.push_str(&format!(
            "&markers=color:red%7Clabel:{}%7C{}",
            index + 1,
            venue.coord()
        ));
    }
    url
}

impl MapPresenter for EmbeddedMap {
    fn update(&mut self, venues: &[Venue]) {
        debug!("Rebuilding embed URL for {} venues", venues.len());
        self.venues = venues.to_vec();
        self.embed_url = embed_url(self.center, self.zoom, &self.venues);
        self.strip = self
            .venues
            .iter()
            .enumerate()
            .map(|(index, venue)| StripEntry {
                number: index + 1,
                label: venue.name.clone(),
                venue_id: venue.id.clone(),
                coord: venue.coord(),
            })
            .collect();
    }

    fn tap(&mut self, index: usize) -> anyhow::Result<()> {
        // Bypasses the tap callback: the embed surface can't highlight a
        // marker, so the strip goes straight to the external map
        if let Some(venue) = self.venues.get(index) {
            let url = links::directions_url(&venue.name, venue.coord(), self.link_target);
            self.opener.open(&url)?;
        } else {
            debug!("Tap on strip entry {} of {} - ignored", index, self.venues.len());
        }
        Ok(())
    }

    fn open_overview(&mut self) -> anyhow::Result<()> {
        match links::route_url(&self.venues) {
            Some(url) => self.opener.open(&url),
            None => {
                debug!("No venues to route - skipping full map");
                Ok(())
            }
        }
    }

    fn set_user_position(&mut self, _position: Option<Coord>) {
        // Static surface, nothing to show
    }

    fn pan(&mut self, _d_latitude: f64, _d_longitude: f64) {
        // Non-interactive by definition
    }

    fn zoom_in(&mut self) {}

    fn zoom_out(&mut self) {}

    fn marker_count(&self) -> usize {
        self.strip.len()
    }

    fn scene(&self) -> MapScene<'_> {
        MapScene::Embedded {
            embed_url: &self.embed_url,
            strip: &self.strip,
        }
    }
}
