//! Canonical coordinate value types.

use serde::{Deserialize, Serialize};

use crate::error::CoordError;

/// A geographic position on the WGS84 ellipsoid, in decimal degrees.
///
/// This is the canonical internal representation; every supported notation
/// converts to and from it. Values are validated on construction and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    /// Latitude in degrees, -90..=90.
    pub latitude: f64,
    /// Longitude in degrees, -180..=180.
    pub longitude: f64,
}

impl GeoCoord {
    /// Create a coordinate, enforcing the WGS84 bounds (inclusive).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        validate(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A projected grid position in meters (easting/northing).
///
/// Intermediate value between the projections and the grid-reference
/// codecs; never part of a formatted result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoord {
    pub easting: f64,
    pub northing: f64,
}

impl GridCoord {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// Check a latitude/longitude pair against the WGS84 bounds.
///
/// The bounds are inclusive: the poles and the antimeridian are valid.
/// NaN never compares inside a range and is rejected.
pub fn validate(latitude: f64, longitude: f64) -> Result<(), CoordError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoordError::LatitudeOutOfBounds(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoordError::LongitudeOutOfBounds(longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_inclusive_bounds() {
        assert!(GeoCoord::new(90.0, 180.0).is_ok());
        assert!(GeoCoord::new(-90.0, -180.0).is_ok());
        assert!(GeoCoord::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        assert_eq!(
            GeoCoord::new(90.0001, 0.0),
            Err(CoordError::LatitudeOutOfBounds(90.0001))
        );
        assert_eq!(
            GeoCoord::new(0.0, -180.5),
            Err(CoordError::LongitudeOutOfBounds(-180.5))
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(GeoCoord::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoord::new(0.0, f64::NAN).is_err());
    }
}
