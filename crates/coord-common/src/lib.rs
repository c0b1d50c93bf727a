//! Common types shared across the nav-coords workspace.

pub mod coordinate;
pub mod error;
pub mod format;

pub use coordinate::{validate, GeoCoord, GridCoord};
pub use error::CoordError;
pub use format::{CoordinateFormat, FormattedCoordinates};
