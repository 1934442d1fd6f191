// Interactive map backend - pannable, zoomable, knows where you are
use crate::presenter::{MapPresenter, MapScene, Marker, TapHandler};
use tacotrail_core::config::MapConfig;
use tacotrail_core::models::{Coord, Venue};
use tracing::debug;

/// The native-feeling surface: live markers with title/subtitle, a user
/// position dot, pan and zoom. Tapping a marker reports the venue back
/// through the caller-supplied callback.
pub struct InteractiveMap {
    venues: Vec<Venue>,
    markers: Vec<Marker>,
    center: Coord,
    latitude_span: f64,
    longitude_span: f64,
    user_position: Option<Coord>,
    on_tap: TapHandler,
}

impl InteractiveMap {
    pub fn new(config: &MapConfig, on_tap: TapHandler) -> Self {
        Self {
            venues: Vec::new(),
            markers: Vec::new(),
            center: config.center(),
            latitude_span: config.latitude_span,
            longitude_span: config.longitude_span,
            user_position: None,
            on_tap,
        }
    }

    fn rebuild_markers(&mut self) {
        self.markers = self
            .venues
            .iter()
            .map(|venue| Marker {
                venue_id: venue.id.clone(),
                title: venue.name.clone(),
                subtitle: venue
                    .description
                    .clone()
                    .unwrap_or_else(|| venue.address.clone()),
                coord: venue.coord(),
            })
            .collect();
    }
}

impl MapPresenter for InteractiveMap {
    fn update(&mut self, venues: &[Venue]) {
        debug!("Replacing {} markers with {}", self.markers.len(), venues.len());
        self.venues = venues.to_vec();
        self.rebuild_markers();
    }

    fn tap(&mut self, index: usize) -> anyhow::Result<()> {
        if let Some(venue) = self.venues.get(index) {
            (self.on_tap)(venue);
        } else {
            debug!("Tap on marker {} with {} markers - ignored", index, self.venues.len());
        }
        Ok(())
    }

    fn open_overview(&mut self) -> anyhow::Result<()> {
        // The interactive surface IS the overview
        Ok(())
    }

    fn set_user_position(&mut self, position: Option<Coord>) {
        self.user_position = position;
        // Center on the user when we know where they are; the default
        // region stays otherwise
        if let Some(position) = position {
            self.center = position;
        }
    }

    fn pan(&mut self, d_latitude: f64, d_longitude: f64) {
        self.center.latitude = (self.center.latitude + d_latitude).clamp(-90.0, 90.0);
        self.center.longitude = (self.center.longitude + d_longitude).clamp(-180.0, 180.0);
    }

    fn zoom_in(&mut self) {
        self.latitude_span = (self.latitude_span * 0.5).max(0.0005);
        self.longitude_span = (self.longitude_span * 0.5).max(0.0005);
    }

    fn zoom_out(&mut self) {
        self.latitude_span = (self.latitude_span * 2.0).min(180.0);
        self.longitude_span = (self.longitude_span * 2.0).min(360.0);
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn scene(&self) -> MapScene<'_> {
        MapScene::Interactive {
            center: self.center,
            latitude_span: self.latitude_span,
            longitude_span: self.longitude_span,
            markers: &self.markers,
            user_position: self.user_position,
        }
    }
}
