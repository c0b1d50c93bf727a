//! Format recognition for free-form coordinate input.

use coord_common::{CoordinateFormat, GeoCoord};
use serde::Serialize;
use tracing::{debug, trace};

use crate::angle::{parse_dd, parse_ddm, parse_dms};
use crate::gridref::{parse_bng, parse_mgrs};

/// A successfully recognized input: which notation matched and the
/// position it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedCoordinate {
    pub format: CoordinateFormat,
    pub coord: GeoCoord,
}

/// Recognition order. The notations have disjoint shapes (MGRS starts
/// with zone digits, BNG with square letters, DMS carries three numbers
/// per axis, DDM two), but DD is the loosest grammar and goes last so a
/// bare number pair is only ever read as decimal degrees.
const PARSERS: [(CoordinateFormat, fn(&str) -> Option<GeoCoord>); 5] = [
    (CoordinateFormat::Mgrs, parse_mgrs),
    (CoordinateFormat::Bng, parse_bng),
    (CoordinateFormat::Dms, parse_dms),
    (CoordinateFormat::Ddm, parse_ddm),
    (CoordinateFormat::Dd, parse_dd),
];

/// Tries each notation parser in precedence order and returns the first
/// match, or `None` when the input is not a coordinate in any supported
/// notation.
pub fn parse(text: &str) -> Option<ParsedCoordinate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    for (format, parser) in PARSERS {
        match parser(trimmed) {
            Some(coord) => {
                debug!(%format, "input recognized");
                return Some(ParsedCoordinate { format, coord });
            }
            None => trace!(%format, "parser declined"),
        }
    }
    None
}
