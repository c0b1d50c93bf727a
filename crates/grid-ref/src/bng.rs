//! British National Grid letter codec.
//!
//! Two-letter 100 km square designators over the OSGB36 projection,
//! followed by zero-padded easting/northing offsets within the square.

use coord_common::GeoCoord;
use projection::{osgb_to_wgs84, wgs84_to_osgb};

use crate::error::GridRefError;

/// 100 km square designators. Row 0 is the southernmost band, columns run
/// west to east.
const GRID_LETTERS: [[&str; 7]; 13] = [
    ["SV", "SW", "SX", "SY", "SZ", "TV", "TW"], // 0-99km
    ["SQ", "SR", "SS", "ST", "SU", "TQ", "TR"], // 100-199km
    ["SL", "SM", "SN", "SO", "SP", "TL", "TM"], // 200-299km
    ["SF", "SG", "SH", "SJ", "SK", "TF", "TG"], // 300-399km
    ["SA", "SB", "SC", "SD", "SE", "TA", "TB"], // 400-499km
    ["NV", "NW", "NX", "NY", "NZ", "OV", "OW"], // 500-599km
    ["NQ", "NR", "NS", "NT", "NU", "OQ", "OR"], // 600-699km
    ["NL", "NM", "NN", "NO", "NP", "OL", "OM"], // 700-799km
    ["NF", "NG", "NH", "NJ", "NK", "OF", "OG"], // 800-899km
    ["NA", "NB", "NC", "ND", "NE", "OA", "OB"], // 900-999km
    ["HV", "HW", "HX", "HY", "HZ", "JV", "JW"], // 1000-1099km
    ["HQ", "HR", "HS", "HT", "HU", "JQ", "JR"], // 1100-1199km
    ["HL", "HM", "HN", "HO", "HP", "JL", "JM"], // 1200-1299km
];

/// Rough WGS84 bounding box of national grid coverage, used as a cheap
/// pre-filter before projecting.
const LAT_MIN: f64 = 49.5;
const LAT_MAX: f64 = 61.0;
const LON_MIN: f64 = -8.5;
const LON_MAX: f64 = 2.0;

const SQUARE: i64 = 100_000;
const EASTING_MAX: i64 = 800_000;
const NORTHING_MAX: i64 = 1_300_000;

/// Encode a WGS84 position as a national grid reference at meter
/// precision, e.g. `TQ 30042 80419`.
pub fn encode(lat: f64, lon: f64) -> Result<String, GridRefError> {
    if !(LAT_MIN..=LAT_MAX).contains(&lat) || !(LON_MIN..=LON_MAX).contains(&lon) {
        return Err(GridRefError::OutOfRange);
    }

    let grid = wgs84_to_osgb(lat, lon);
    let easting = grid.easting.round() as i64;
    let northing = grid.northing.round() as i64;
    if !(0..=EASTING_MAX).contains(&easting) || !(0..=NORTHING_MAX).contains(&northing) {
        return Err(GridRefError::OutOfRange);
    }

    // The populated table is the authority: an index past its edge is out
    // of range even when the pre-filter passed.
    let col = (easting / SQUARE) as usize;
    let row = (northing / SQUARE) as usize;
    if row >= GRID_LETTERS.len() || col >= GRID_LETTERS[0].len() {
        return Err(GridRefError::OutOfRange);
    }

    Ok(format!(
        "{} {:05} {:05}",
        GRID_LETTERS[row][col],
        easting % SQUARE,
        northing % SQUARE
    ))
}

/// Decode a national grid reference back to WGS84.
///
/// Accepts spaced and concatenated digit forms. Numeric groups of 3-5
/// digits are right-padded to meter precision: a 3-digit group is the
/// truncated high-order part of a 100 m reference.
pub fn decode(text: &str) -> Result<GeoCoord, GridRefError> {
    let upper = text.trim().to_uppercase();
    let mut parts = upper.split_whitespace();

    let head = parts.next().ok_or_else(|| malformed(text))?;
    if head.len() < 2 || !head.as_bytes()[..2].iter().all(u8::is_ascii_alphabetic) {
        return Err(malformed(text));
    }
    let letters = &head[..2];

    let mut groups: Vec<&str> = Vec::new();
    if head.len() > 2 {
        groups.push(&head[2..]);
    }
    groups.extend(parts);
    if groups.is_empty() || groups.iter().any(|g| !g.bytes().all(|b| b.is_ascii_digit())) {
        return Err(malformed(text));
    }

    let (e_off, n_off) = match groups.as_slice() {
        [run] if run.len() >= 6 && run.len() <= 10 && run.len() % 2 == 0 => {
            let half = run.len() / 2;
            (pad_group(&run[..half])?, pad_group(&run[half..])?)
        }
        [easting, northing] => (pad_group(easting)?, pad_group(northing)?),
        _ => return Err(malformed(text)),
    };

    let (row, col) =
        lookup(letters).ok_or_else(|| GridRefError::UnknownSquare(letters.to_string()))?;

    let easting = (col as i64 * SQUARE + e_off) as f64;
    let northing = (row as i64 * SQUARE + n_off) as f64;
    let (lat, lon) = osgb_to_wgs84(easting, northing);
    GeoCoord::new(lat, lon).map_err(|_| GridRefError::OutOfRange)
}

/// Right-pad a 3-5 digit group to a 5-digit meter offset.
fn pad_group(group: &str) -> Result<i64, GridRefError> {
    if !(3..=5).contains(&group.len()) {
        return Err(malformed(group));
    }
    let value: i64 = group.parse().map_err(|_| malformed(group))?;
    Ok(value * 10_i64.pow(5 - group.len() as u32))
}

/// Reverse scan of the letter table. 91 entries, so a linear walk is
/// plenty.
fn lookup(letters: &str) -> Option<(usize, usize)> {
    for (row, band) in GRID_LETTERS.iter().enumerate() {
        for (col, square) in band.iter().enumerate() {
            if *square == letters {
                return Some((row, col));
            }
        }
    }
    None
}

fn malformed(text: &str) -> GridRefError {
    GridRefError::Malformed(text.to_string())
}
