//! UTM zone selection and projection.

use thiserror::Error;

use crate::tmerc::TransverseMercator;

/// False northing applied in the southern hemisphere, meters.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("Latitude {0} outside UTM limits -80..=84")]
    LatitudeOutOfRange(f64),
}

/// A position within a UTM zone.
///
/// `northing` includes the 10,000 km false northing in the southern
/// hemisphere, matching the MGRS convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    pub zone: u8,
    pub northern: bool,
    pub easting: f64,
    pub northing: f64,
}

/// UTM zone for a position, including the Norway and Svalbard exceptions.
pub fn zone_for(lat: f64, lon: f64) -> u8 {
    if lon == 180.0 {
        return 60;
    }
    let mut zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;

    // Zone 32 is widened over southern Norway.
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        zone = 32;
    }
    // Svalbard uses the odd zones 31/33/35/37 only.
    if (72.0..=84.0).contains(&lat) {
        zone = match lon {
            l if (0.0..9.0).contains(&l) => 31,
            l if (9.0..21.0).contains(&l) => 33,
            l if (21.0..33.0).contains(&l) => 35,
            l if (33.0..42.0).contains(&l) => 37,
            _ => zone,
        };
    }

    zone.clamp(1, 60) as u8
}

impl Utm {
    /// Project a WGS84 position into its UTM zone.
    pub fn from_latlon(lat: f64, lon: f64) -> Result<Self, ProjectionError> {
        if !(-80.0..=84.0).contains(&lat) {
            return Err(ProjectionError::LatitudeOutOfRange(lat));
        }
        let zone = zone_for(lat, lon);
        let grid = TransverseMercator::utm_zone(zone).forward(lat, lon);
        let northern = lat >= 0.0;
        let northing = if northern {
            grid.northing
        } else {
            grid.northing + FALSE_NORTHING_SOUTH
        };

        Ok(Self {
            zone,
            northern,
            easting: grid.easting,
            northing,
        })
    }

    /// Convert back to WGS84 degrees.
    pub fn to_latlon(&self) -> (f64, f64) {
        let y = if self.northern {
            self.northing
        } else {
            self.northing - FALSE_NORTHING_SOUTH
        };
        TransverseMercator::utm_zone(self.zone).inverse(self.easting, y)
    }
}
