//! Alphanumeric grid-reference codecs: British National Grid and MGRS.
//!
//! Both notations layer a lettered 100 km square scheme over a transverse
//! Mercator grid from the `projection` crate, followed by numeric offsets
//! within the square.

pub mod bng;
pub mod error;
pub mod mgrs;

pub use error::GridRefError;
