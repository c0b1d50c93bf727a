//! Coordinate notation conversion for maritime and land navigation.
//!
//! Converts WGS84 positions between five notations (decimal degrees,
//! degrees-decimal-minutes, degrees-minutes-seconds, British National
//! Grid, and MGRS), recognizes free-form input in any of them, and
//! derives navigation deep links and great-circle distance/bearing.
//!
//! Everything here is synchronous, stateless, pure computation; callers
//! on any number of threads need no coordination.

pub mod angle;
pub mod bundle;
pub mod dispatch;
pub mod error;
pub mod gridref;
pub mod nav;

pub use angle::{format_dd, format_ddm, format_dms, parse_dd, parse_ddm, parse_dms};
pub use bundle::convert;
pub use dispatch::{parse, ParsedCoordinate};
pub use error::{is_error_result, FormatError};
pub use gridref::{format_bng, format_mgrs, parse_bng, parse_mgrs};
pub use nav::{distance_m, initial_bearing_deg, navigation_urls, NavigationUrls};

pub use coord_common::{CoordError, CoordinateFormat, FormattedCoordinates, GeoCoord};
