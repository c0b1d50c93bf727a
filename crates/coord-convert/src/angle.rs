//! Angular notation formatters and parsers (DD, DDM, DMS).
//!
//! Formatting is hemisphere-letter based for DDM and DMS and signed
//! decimal for DD. Rounding carries minutes/seconds that land exactly
//! on 60 up into the next unit, so formatted output always re-parses
//! to a value within the printed precision.

use coord_common::{validate, GeoCoord};

/// Which half of a coordinate pair a value belongs to. Controls the
/// hemisphere letters, degree zero-padding, and the degree bound.
#[derive(Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }

    /// Zero-padded width of the degree field: 2 for latitude, 3 for longitude.
    fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    fn max_degrees(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    fn accepts(self, hemi: char) -> bool {
        matches!(
            (self, hemi),
            (Axis::Latitude, 'N' | 'S') | (Axis::Longitude, 'E' | 'W')
        )
    }

    /// Applies a hemisphere letter's sign to a magnitude, rejecting
    /// letters that belong to the other axis.
    fn signed(self, magnitude: f64, hemi: char) -> Option<f64> {
        if !self.accepts(hemi) {
            return None;
        }
        if hemi == 'S' || hemi == 'W' {
            Some(-magnitude)
        } else {
            Some(magnitude)
        }
    }
}

/// Formats a position as signed decimal degrees, six decimal places.
pub fn format_dd(coord: &GeoCoord) -> String {
    format!("{:.6}, {:.6}", coord.latitude, coord.longitude)
}

/// Formats a position in degrees and decimal minutes.
pub fn format_ddm(coord: &GeoCoord) -> String {
    format!(
        "{}, {}",
        axis_ddm(coord.latitude, Axis::Latitude),
        axis_ddm(coord.longitude, Axis::Longitude)
    )
}

/// Formats a position in degrees, minutes, and decimal seconds.
pub fn format_dms(coord: &GeoCoord) -> String {
    format!(
        "{}, {}",
        axis_dms(coord.latitude, Axis::Latitude),
        axis_dms(coord.longitude, Axis::Longitude)
    )
}

fn axis_ddm(value: f64, axis: Axis) -> String {
    let hemi = axis.hemisphere(value < 0.0);
    let magnitude = value.abs();
    let mut degrees = magnitude.trunc() as u32;
    // Round minutes to the printed precision before splitting, so a
    // value like 59.9999666' prints as the next whole degree rather
    // than "60.000'".
    let mut minutes = ((magnitude - degrees as f64) * 60.0 * 1000.0).round() / 1000.0;
    if minutes >= 60.0 {
        minutes = 0.0;
        degrees += 1;
    }
    format!(
        "{:0width$}° {:.3}' {}",
        degrees,
        minutes,
        hemi,
        width = axis.degree_width()
    )
}

fn axis_dms(value: f64, axis: Axis) -> String {
    let hemi = axis.hemisphere(value < 0.0);
    let magnitude = value.abs();
    let mut degrees = magnitude.trunc() as u32;
    let minutes_f = (magnitude - degrees as f64) * 60.0;
    let mut minutes = minutes_f.trunc() as u32;
    let mut seconds = ((minutes_f - minutes as f64) * 60.0 * 10.0).round() / 10.0;
    if seconds >= 60.0 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }
    format!(
        "{:0width$}° {:02}' {:.1}\" {}",
        degrees,
        minutes,
        seconds,
        hemi,
        width = axis.degree_width()
    )
}

/// Splits input on the single comma separating latitude from longitude.
fn split_pair(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.splitn(2, ',');
    let first = parts.next()?;
    let second = parts.next()?;
    if second.contains(',') {
        return None;
    }
    Some((first, second))
}

/// Tokenizes one axis of hemisphere-letter input: unit marks become
/// whitespace, leaving bare numbers and exactly one trailing N/S/E/W
/// letter. Returns the numbers in order plus the hemisphere letter.
fn axis_tokens(text: &str) -> Option<(Vec<f64>, char)> {
    let cleaned: String = text
        .chars()
        .map(|ch| match ch {
            '°' | '\'' | '"' | '′' | '″' => ' ',
            other => other,
        })
        .collect();

    let mut numbers = Vec::new();
    let mut hemi = None;
    for token in cleaned.split_whitespace() {
        if hemi.is_some() {
            // Nothing may follow the hemisphere letter.
            return None;
        }
        let last = token.chars().last()?;
        let (digits, letter) = if last.is_ascii_alphabetic() {
            (&token[..token.len() - 1], Some(last.to_ascii_uppercase()))
        } else {
            (token, None)
        };
        if !digits.is_empty() {
            let value: f64 = digits.parse().ok()?;
            if value < 0.0 {
                // Hemisphere notation carries sign in the letter.
                return None;
            }
            numbers.push(value);
        }
        if let Some(letter) = letter {
            if !matches!(letter, 'N' | 'S' | 'E' | 'W') {
                return None;
            }
            hemi = Some(letter);
        }
    }
    Some((numbers, hemi?))
}

fn parse_axis_ddm(text: &str, axis: Axis) -> Option<f64> {
    let (numbers, hemi) = axis_tokens(text)?;
    if numbers.len() != 2 {
        return None;
    }
    let degrees = numbers[0];
    let minutes = numbers[1];
    if degrees.fract() != 0.0 || degrees > axis.max_degrees() || !(0.0..60.0).contains(&minutes) {
        return None;
    }
    axis.signed(degrees + minutes / 60.0, hemi)
}

fn parse_axis_dms(text: &str, axis: Axis) -> Option<f64> {
    let (numbers, hemi) = axis_tokens(text)?;
    if numbers.len() != 3 {
        return None;
    }
    let degrees = numbers[0];
    let minutes = numbers[1];
    let seconds = numbers[2];
    if degrees.fract() != 0.0 || degrees > axis.max_degrees() {
        return None;
    }
    if minutes.fract() != 0.0 || !(0.0..60.0).contains(&minutes) {
        return None;
    }
    if !(0.0..60.0).contains(&seconds) {
        return None;
    }
    axis.signed(degrees + minutes / 60.0 + seconds / 3600.0, hemi)
}

/// Parses signed decimal degrees, `"lat, lon"`.
pub fn parse_dd(text: &str) -> Option<GeoCoord> {
    let (lat_text, lon_text) = split_pair(text)?;
    let latitude: f64 = lat_text.trim().parse().ok()?;
    let longitude: f64 = lon_text.trim().parse().ok()?;
    if validate(latitude, longitude).is_err() {
        return None;
    }
    Some(GeoCoord {
        latitude,
        longitude,
    })
}

/// Parses degrees and decimal minutes with hemisphere letters.
pub fn parse_ddm(text: &str) -> Option<GeoCoord> {
    let (lat_text, lon_text) = split_pair(text)?;
    let latitude = parse_axis_ddm(lat_text, Axis::Latitude)?;
    let longitude = parse_axis_ddm(lon_text, Axis::Longitude)?;
    GeoCoord::new(latitude, longitude).ok()
}

/// Parses degrees, minutes, and decimal seconds with hemisphere letters.
pub fn parse_dms(text: &str) -> Option<GeoCoord> {
    let (lat_text, lon_text) = split_pair(text)?;
    let latitude = parse_axis_dms(lat_text, Axis::Latitude)?;
    let longitude = parse_axis_dms(lon_text, Axis::Longitude)?;
    GeoCoord::new(latitude, longitude).ok()
}
