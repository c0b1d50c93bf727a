//! Formatter failures and the sentinel-string vocabulary.

use thiserror::Error;

/// Failure of a single notation formatter.
///
/// The `Display` strings double as the per-field sentinel values stored
/// in a [`FormattedCoordinates`](coord_common::FormattedCoordinates)
/// bundle, so a caller can show four good formats alongside one failed
/// one. Valid formatted output is digits, degree marks, hemisphere and
/// grid letters only, so it never collides with this vocabulary.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// The position lies outside the notation's designed coverage.
    #[error("Out of range")]
    OutOfRange,

    /// The position cannot be expressed in the notation at all.
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

/// Substrings (matched case-insensitively) that mark a bundle field as an
/// error sentinel rather than a coordinate.
const ERROR_PATTERNS: [&str; 6] = [
    "out of range",
    "invalid",
    "error",
    "failed",
    "not valid",
    "unable",
];

/// Whether a formatted-bundle field holds an error sentinel.
pub fn is_error_result(value: &str) -> bool {
    let lower = value.to_lowercase();
    ERROR_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_recognized() {
        assert!(is_error_result("Out of range"));
        assert!(is_error_result("Invalid coordinates"));
        assert!(is_error_result("BNG conversion FAILED"));
        assert!(is_error_result("unable to convert"));
    }

    #[test]
    fn test_valid_output_is_not_recognized() {
        assert!(!is_error_result("51.507400, -0.127800"));
        assert!(!is_error_result("TQ 30042 80419"));
        assert!(!is_error_result("30U XC 99312 09617"));
        assert!(!is_error_result("51° 30' 26.6\" N, 000° 07' 40.1\" W"));
    }

    #[test]
    fn test_display_matches_sentinel_vocabulary() {
        assert!(is_error_result(&FormatError::OutOfRange.to_string()));
        assert!(is_error_result(&FormatError::InvalidCoordinates.to_string()));
    }
}
