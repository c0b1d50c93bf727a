//! One-shot conversion of a position into every supported notation.

use coord_common::{CoordError, FormattedCoordinates, GeoCoord};
use tracing::debug;

use crate::angle::{format_dd, format_ddm, format_dms};
use crate::gridref::{format_bng, format_mgrs};

/// Renders a position in all five notations at once.
///
/// The angular notations cover the whole globe and always succeed once
/// the input validates. The regional grids may not apply to the
/// position; their fields then carry the formatter's error sentinel
/// instead of a reference, so one unavailable notation never hides the
/// other four. Out-of-bounds input fails the whole call.
pub fn convert(latitude: f64, longitude: f64) -> Result<FormattedCoordinates, CoordError> {
    let coord = GeoCoord::new(latitude, longitude)?;
    debug!(latitude, longitude, "converting position to all notations");

    Ok(FormattedCoordinates {
        dd: format_dd(&coord),
        ddm: format_ddm(&coord),
        dms: format_dms(&coord),
        bng: format_bng(&coord).unwrap_or_else(|err| err.to_string()),
        mgrs: format_mgrs(&coord).unwrap_or_else(|err| err.to_string()),
    })
}
