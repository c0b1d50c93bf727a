//! Validation error for caller-supplied coordinates.

use thiserror::Error;

/// Precondition violation: a latitude/longitude pair outside WGS84 bounds.
///
/// Distinct from the "this text is not that notation" outcome parsers
/// report with `None`, and from the per-field sentinel strings inside a
/// formatted bundle. This one means caller misuse.
#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    #[error("Latitude {0} outside valid range -90..=90")]
    LatitudeOutOfBounds(f64),

    #[error("Longitude {0} outside valid range -180..=180")]
    LongitudeOutOfBounds(f64),
}
