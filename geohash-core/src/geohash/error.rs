//! Error types for geohash operations.

use thiserror::Error;

use super::types::Direction;

/// Errors that can occur while encoding, decoding or walking geohash cells.
#[derive(Error, Debug)]
pub enum GeohashError {
    /// Geohash is empty, contains a symbol outside the base-32 alphabet, or
    /// could not be produced from the given coordinate.
    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Direction is not one of N, S, E or W.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// Stepping in this direction would leave the globe (beyond a pole).
    #[error("No cell {direction} of {geohash}: beyond the pole")]
    OutOfRange {
        /// The cell the step started from.
        geohash: String,
        /// The direction of the rejected step.
        direction: Direction,
    },

    /// Serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;
