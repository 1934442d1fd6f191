// Map presentation and the external map integrations
//
// Everything the core treats as "the map" lives behind the MapPresenter
// trait here, and everything that leaves the process (deep links, the
// embed URL, the system URL opener, device location) has its seam in
// this crate.
pub mod embedded;
pub mod interactive;
pub mod links;
pub mod location;
pub mod opener;
pub mod presenter;

pub use embedded::EmbeddedMap;
pub use interactive::InteractiveMap;
pub use links::LinkTarget;
pub use location::{
    query_position, FixedLocation, LocationError, LocationProvider, NoLocation, PermissionStatus,
};
pub use opener::{SystemOpener, UrlOpener};
pub use presenter::{compose, MapPresenter, MapScene, Marker, StripEntry, TapHandler};
