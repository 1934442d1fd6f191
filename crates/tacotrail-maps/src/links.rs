// Deep links into external map applications
//
// The contract here is only to construct a well-formed URI; whether a
// handler exists for it is the opener's problem.
use tacotrail_core::models::{Coord, Venue};
use urlencoding::encode;

/// Which style of maps URI to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Google Maps search URL, works in any browser
    Web,
    /// Apple Maps URI scheme
    Ios,
    /// geo: URI scheme
    Android,
}

impl LinkTarget {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "web" => Some(LinkTarget::Web),
            "ios" => Some(LinkTarget::Ios),
            "android" => Some(LinkTarget::Android),
            _ => None,
        }
    }
}

impl std::fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkTarget::Web => write!(f, "web"),
            LinkTarget::Ios => write!(f, "ios"),
            LinkTarget::Android => write!(f, "android"),
        }
    }
}

/// Build a "get directions" link for one destination.
///
/// Labels are percent-encoded so venue names with spaces or parentheses
/// still produce a valid URI. Construction never fails.
pub fn directions_url(name: &str, coord: Coord, target: LinkTarget) -> String {
    match target {
        LinkTarget::Web => format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            coord.latitude, coord.longitude
        ),
        LinkTarget::Ios => format!(
            "maps://0,0?q={}@{},{}",
            encode(name),
            coord.latitude,
            coord.longitude
        ),
        LinkTarget::Android => format!(
            "geo:0,0?q={},{}({})",
            coord.latitude,
            coord.longitude,
            encode(name)
        ),
    }
}

/// Build a route URL over the whole filtered set, first venue as the
/// destination and every stop as a waypoint.
///
/// Returns None for an empty set - there is nothing to route to.
pub fn route_url(venues: &[Venue]) -> Option<String> {
    let first = venues.first()?;
    let waypoints = venues
        .iter()
        .map(|v| v.coord().to_string())
        .collect::<Vec<_>>()
        .join("%7C");

    Some(format!(
        "https://www.google.com/maps/dir/?api=1&destination={}&waypoints={}",
        first.coord(),
        waypoints
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tacotrail_core::models::{DietaryFlags, Venue};

    fn test_venue(id: &str, name: &str, latitude: f64, longitude: f64) -> Venue {
        Venue {
            id: id.to_string(),
            name: name.to_string(),
            address: "somewhere in Chattanooga".to_string(),
            latitude,
            longitude,
            description: None,
            featured_item: None,
            website: None,
            ingredients: Vec::new(),
            specialties: Vec::new(),
            dietary: DietaryFlags::default(),
        }
    }

    #[test]
    fn test_web_directions_url() {
        let url = directions_url("423 Taco", Coord::new(35.0468, -85.3134), LinkTarget::Web);
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=35.0468,-85.3134"
        );
    }

    #[test]
    fn test_ios_directions_url_encodes_label() {
        let url = directions_url(
            "Taco Mamacita (Northshore)",
            Coord::new(35.0576, -85.3096),
            LinkTarget::Ios,
        );
        assert_eq!(
            url,
            "maps://0,0?q=Taco%20Mamacita%20%28Northshore%29@35.0576,-85.3096"
        );
    }

    #[test]
    fn test_android_directions_url_encodes_label() {
        let url = directions_url(
            "Agave & Rye",
            Coord::new(35.047, -85.3089),
            LinkTarget::Android,
        );
        assert_eq!(url, "geo:0,0?q=35.047,-85.3089(Agave%20%26%20Rye)");
    }

    #[test]
    fn test_route_url_orders_waypoints() {
        let venues = vec![
            test_venue("1", "A", 35.1, -85.1),
            test_venue("2", "B", 35.2, -85.2),
            test_venue("3", "C", 35.3, -85.3),
        ];
        let url = route_url(&venues).unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=35.1,-85.1\
             &waypoints=35.1,-85.1%7C35.2,-85.2%7C35.3,-85.3"
        );
    }

    #[test]
    fn test_route_url_empty_set_is_none() {
        assert!(route_url(&[]).is_none());
    }

    #[test]
    fn test_link_target_from_name() {
        assert_eq!(LinkTarget::from_name("web"), Some(LinkTarget::Web));
        assert_eq!(LinkTarget::from_name("IOS"), Some(LinkTarget::Ios));
        assert_eq!(LinkTarget::from_name("Android"), Some(LinkTarget::Android));
        assert_eq!(LinkTarget::from_name("windows-phone"), None);
    }
}
