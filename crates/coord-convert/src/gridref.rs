//! Grid-reference formatters and parsers over the `grid-ref` codecs.
//!
//! Thin adapters that translate the codec error types into the bundle
//! sentinel vocabulary on the formatting side and into simple `Option`
//! recognition on the parsing side.

use coord_common::GeoCoord;
use grid_ref::{bng, mgrs, GridRefError};

use crate::error::FormatError;

/// MGRS numeric precision used by the formatter: five digits per
/// ordinate, one metre resolution.
const MGRS_DIGITS: usize = 5;

/// Formats a position as a British National Grid reference.
pub fn format_bng(coord: &GeoCoord) -> Result<String, FormatError> {
    bng::encode(coord.latitude, coord.longitude).map_err(|err| match err {
        GridRefError::OutOfRange => FormatError::OutOfRange,
        _ => FormatError::InvalidCoordinates,
    })
}

/// Formats a position as a one-metre MGRS reference.
pub fn format_mgrs(coord: &GeoCoord) -> Result<String, FormatError> {
    mgrs::encode(coord.latitude, coord.longitude, MGRS_DIGITS)
        .map_err(|_| FormatError::InvalidCoordinates)
}

/// Parses a British National Grid reference back to WGS84.
pub fn parse_bng(text: &str) -> Option<GeoCoord> {
    bng::decode(text).ok()
}

/// Parses an MGRS reference back to WGS84.
pub fn parse_mgrs(text: &str) -> Option<GeoCoord> {
    mgrs::decode(text).ok()
}
