//! Datum and map projection math for the nav-coords workspace.
//!
//! Implements the WGS84 ⇄ OSGB36 pipeline (geocentric Helmert shift plus
//! the Ordnance Survey transverse Mercator series) and UTM zone projection.

pub mod ellipsoid;
pub mod helmert;
pub mod osgb;
pub mod tmerc;
pub mod utm;

pub use ellipsoid::Ellipsoid;
pub use helmert::HelmertParams;
pub use osgb::{osgb_to_wgs84, wgs84_to_osgb};
pub use tmerc::TransverseMercator;
pub use utm::{zone_for, ProjectionError, Utm};
