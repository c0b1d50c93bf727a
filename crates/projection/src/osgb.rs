//! The WGS84 ⇄ OSGB36 national grid pipeline.
//!
//! Forward: WGS84 geodetic → geocentric cartesian → Helmert shift →
//! Airy 1830 geodetic → transverse Mercator grid. Inverse runs the same
//! chain backwards.

use coord_common::GridCoord;

use crate::ellipsoid::Ellipsoid;
use crate::helmert::{self, WGS84_TO_OSGB36};
use crate::tmerc::TransverseMercator;

/// Project a WGS84 position to OSGB36 grid easting/northing in meters.
///
/// Pure numeric transform with no failure modes. Accuracy is only
/// meaningful inside the national grid's designed coverage; callers are
/// responsible for bounds-checking before or after projecting.
pub fn wgs84_to_osgb(lat: f64, lon: f64) -> GridCoord {
    let cart = helmert::geodetic_to_cartesian(lat, lon, Ellipsoid::WGS84);
    let shifted = WGS84_TO_OSGB36.apply(cart);
    let (lat36, lon36) = helmert::cartesian_to_geodetic(shifted, Ellipsoid::AIRY_1830);
    TransverseMercator::national_grid().forward(lat36, lon36)
}

/// Inverse of [`wgs84_to_osgb`].
pub fn osgb_to_wgs84(easting: f64, northing: f64) -> (f64, f64) {
    let (lat36, lon36) = TransverseMercator::national_grid().inverse(easting, northing);
    let cart = helmert::geodetic_to_cartesian(lat36, lon36, Ellipsoid::AIRY_1830);
    let shifted = WGS84_TO_OSGB36.inverse().apply(cart);
    helmert::cartesian_to_geodetic(shifted, Ellipsoid::WGS84)
}
