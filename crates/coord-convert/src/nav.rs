//! Navigation deep links and great-circle geometry.

use coord_common::GeoCoord;
use serde::Serialize;

/// Mean Earth radius in metres, for haversine distance.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Deep links that open a position in mapping applications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationUrls {
    /// Opens the position as a map pin.
    pub map_url: String,
    /// Starts turn-by-turn navigation to the position.
    pub nav_url: String,
}

/// Builds map and navigation links for a position. The query strings
/// carry plain signed decimal degrees, which need no URL escaping.
pub fn navigation_urls(coord: &GeoCoord) -> NavigationUrls {
    NavigationUrls {
        map_url: format!(
            "https://www.google.com/maps?q={},{}",
            coord.latitude, coord.longitude
        ),
        nav_url: format!(
            "https://waze.com/ul?ll={},{}&navigate=yes",
            coord.latitude, coord.longitude
        ),
    }
}

/// Great-circle distance between two positions in metres (haversine).
pub fn distance_m(from: &GeoCoord, to: &GeoCoord) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing from one position toward another, in
/// degrees clockwise from true north, normalized to `0..360`.
pub fn initial_bearing_deg(from: &GeoCoord, to: &GeoCoord) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::points;

    fn coord(pair: (f64, f64)) -> GeoCoord {
        GeoCoord {
            latitude: pair.0,
            longitude: pair.1,
        }
    }

    #[test]
    fn test_navigation_urls() {
        let urls = navigation_urls(&coord((51.5074, -0.1278)));
        assert_eq!(urls.map_url, "https://www.google.com/maps?q=51.5074,-0.1278");
        assert_eq!(
            urls.nav_url,
            "https://waze.com/ul?ll=51.5074,-0.1278&navigate=yes"
        );
    }

    #[test]
    fn test_distance_london_paris() {
        let distance = distance_m(&coord(points::LONDON), &coord(points::PARIS));
        assert!(
            (330_000.0..350_000.0).contains(&distance),
            "London-Paris distance off: {distance}"
        );
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let london = coord(points::LONDON);
        assert!(distance_m(&london, &london) < 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_m(&coord(points::LONDON), &coord(points::SYDNEY));
        let back = distance_m(&coord(points::SYDNEY), &coord(points::LONDON));
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = coord((0.0, 0.0));
        assert!((initial_bearing_deg(&origin, &coord((1.0, 0.0))) - 0.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&origin, &coord((0.0, 1.0))) - 90.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&origin, &coord((-1.0, 0.0))) - 180.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&origin, &coord((0.0, -1.0))) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_london_paris_southeast() {
        let bearing = initial_bearing_deg(&coord(points::LONDON), &coord(points::PARIS));
        assert!(
            (140.0..160.0).contains(&bearing),
            "London-Paris bearing off: {bearing}"
        );
    }
}
