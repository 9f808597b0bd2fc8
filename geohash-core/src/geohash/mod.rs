//! Geohash encoding and cell arithmetic.
//!
//! Provides:
//! - Encoding a coordinate to a geohash of a given length
//! - Decoding a geohash to its cell center or its bounds
//! - Adjacent-cell and eight-neighbour lookup
//! - Cell size and error radius per length
//!
//! All operations are pure functions over plain values. Input geohashes are
//! case-insensitive; output is always lowercase.
//!
//! # Example Usage
//!
//! ```
//! use geohash_core::geohash::{self, Direction};
//!
//! let hash = geohash::encode(57.64911, 10.40744, 6).unwrap();
//! assert_eq!(hash, "u4pruy");
//!
//! let cell = geohash::bounds(&hash).unwrap();
//! let center = geohash::decode(&hash).unwrap();
//! assert!(cell.contains(&center));
//!
//! let north = geohash::adjacent(&hash, Direction::North).unwrap();
//! assert_eq!(north, "u4pruz");
//!
//! let around = geohash::neighbours(&hash).unwrap();
//! println!("JSON: {}", around.to_json().unwrap());
//! ```

mod adjacency;
mod codec;
mod error;
mod precision;
mod tables;
mod types;

pub use adjacency::{adjacent, adjacent_with, neighbours, neighbours_with};
pub use codec::{bounds, decode, encode, encode_auto, encode_auto_up_to};
pub use error::{GeohashError, Result};
pub use precision::{cell_size, error_radius_meters, MAX_PRECISION, PRECISION_LIMIT};
pub use tables::{symbol, symbol_index, BASE32};
pub use types::{
    BorderPolicy, BoundingBox, CodecSettings, CompassPoint, Coordinate, Direction, Neighbours,
};
