//! Geohash Core Library
//!
//! Converts latitude/longitude coordinates to geohashes and back, and walks
//! between neighbouring geohash cells. Everything here is pure and
//! synchronous; map rendering, geolocation and geocoding live with the
//! callers.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

mod api;
pub mod geohash;

pub use api::GeohashCodec;
