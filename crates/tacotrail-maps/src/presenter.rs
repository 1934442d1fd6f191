// The map seam - one trait, two capability-equivalent backends
use crate::{
    embedded::EmbeddedMap, interactive::InteractiveMap, opener::UrlOpener, LinkTarget,
};
use std::sync::Arc;
use tacotrail_core::config::{MapBackendKind, MapConfig};
use tacotrail_core::models::{Coord, Venue};

/// Caller-supplied callback invoked with the venue behind a tapped marker
pub type TapHandler = Box<dyn FnMut(&Venue) + Send>;

/// One pin on the interactive surface
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub venue_id: String,
    pub title: String,
    pub subtitle: String,
    pub coord: Coord,
}

/// One numbered label in the embedded backend's scrollable strip.
/// The number matches the marker baked into the embed URL.
#[derive(Debug, Clone, PartialEq)]
pub struct StripEntry {
    pub number: usize,
    pub label: String,
    pub venue_id: String,
    pub coord: Coord,
}

/// Read-only projection of presenter state for whoever draws it.
/// The presenter owns the data; it never draws anything itself.
pub enum MapScene<'a> {
    Interactive {
        center: Coord,
        latitude_span: f64,
        longitude_span: f64,
        markers: &'a [Marker],
        user_position: Option<Coord>,
    },
    Embedded {
        embed_url: &'a str,
        strip: &'a [StripEntry],
    },
}

/// What every map backend must be able to do.
///
/// `update` replaces the marker set and is called every time the
/// filtered view changes; the venue data handed in is never mutated.
/// `tap` on an index that doesn't exist (including the empty set) is a
/// quiet no-op, never a panic.
pub trait MapPresenter: Send {
    fn update(&mut self, venues: &[Venue]);

    fn tap(&mut self, index: usize) -> anyhow::Result<()>;

    /// Open a full external map over the whole current set, when the
    /// backend has one. No-op on an empty set.
    fn open_overview(&mut self) -> anyhow::Result<()>;

    fn set_user_position(&mut self, position: Option<Coord>);

    fn pan(&mut self, d_latitude: f64, d_longitude: f64);

    fn zoom_in(&mut self);

    fn zoom_out(&mut self);

    fn marker_count(&self) -> usize;

    fn scene(&self) -> MapScene<'_>;
}

/// Pick the backend once, at composition time.
///
/// This is deliberately the only place that looks at the backend kind;
/// after this everything goes through the trait.
pub fn compose(
    config: &MapConfig,
    on_tap: TapHandler,
    opener: Arc<dyn UrlOpener>,
) -> Box<dyn MapPresenter> {
    match config.backend {
        MapBackendKind::Interactive => Box::new(InteractiveMap::new(config, on_tap)),
        MapBackendKind::Embedded => {
            Box::new(EmbeddedMap::new(config, opener, LinkTarget::Web))
        }
    }
}
