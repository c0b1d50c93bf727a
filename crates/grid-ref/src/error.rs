//! Error types for grid-reference encoding and decoding.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridRefError {
    /// The position projects outside the grid's designed coverage.
    #[error("Position outside grid coverage")]
    OutOfRange,

    /// The text does not match the grid-reference grammar.
    #[error("Malformed grid reference: {0}")]
    Malformed(String),

    /// Letters that do not designate any 100 km square.
    #[error("Unknown grid square: {0}")]
    UnknownSquare(String),
}
