//! Coordinate notation tags and the all-formats output bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five supported coordinate notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateFormat {
    /// Decimal degrees
    Dd,
    /// Degrees and decimal minutes
    Ddm,
    /// Degrees, minutes and seconds
    Dms,
    /// British National Grid
    Bng,
    /// Military Grid Reference System
    Mgrs,
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            CoordinateFormat::Dd => "DD",
            CoordinateFormat::Ddm => "DDM",
            CoordinateFormat::Dms => "DMS",
            CoordinateFormat::Bng => "BNG",
            CoordinateFormat::Mgrs => "MGRS",
        };
        write!(f, "{}", tag)
    }
}

/// Output of running all five formatters over one position.
///
/// Each field holds either a valid formatted string or a sentinel error
/// string ("Out of range", "Invalid coordinates"); there is no
/// partial-failure state beyond the per-field sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedCoordinates {
    #[serde(rename = "DD")]
    pub dd: String,
    #[serde(rename = "DDM")]
    pub ddm: String,
    #[serde(rename = "DMS")]
    pub dms: String,
    #[serde(rename = "BNG")]
    pub bng: String,
    #[serde(rename = "MGRS")]
    pub mgrs: String,
}

impl FormattedCoordinates {
    /// Field access keyed by notation tag.
    pub fn get(&self, format: CoordinateFormat) -> &str {
        match format {
            CoordinateFormat::Dd => &self.dd,
            CoordinateFormat::Ddm => &self.ddm,
            CoordinateFormat::Dms => &self.dms,
            CoordinateFormat::Bng => &self.bng,
            CoordinateFormat::Mgrs => &self.mgrs,
        }
    }
}
