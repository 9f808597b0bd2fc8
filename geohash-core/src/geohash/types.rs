//! Geohash value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GeohashError, Result};
use super::precision::MAX_PRECISION;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::Coordinate;
///
/// let point = Coordinate::new(57.64911, 10.40744);
/// assert!(point.is_on_globe());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, -90.0 to 90.0
    pub lat: f64,
    /// Longitude, -180.0 to 180.0
    pub lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No validation is performed.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both components are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns true if the coordinate is finite and inside the latitude and
    /// longitude ranges of the globe.
    #[must_use]
    pub fn is_on_globe(&self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// The rectangular cell denoted by a geohash.
///
/// `southwest` holds the minimum latitude and longitude, `northeast` the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner (minimum latitude and longitude)
    pub southwest: Coordinate,
    /// North-east corner (maximum latitude and longitude)
    pub northeast: Coordinate,
}

impl BoundingBox {
    /// Returns the center point of the cell.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.southwest.lat + self.northeast.lat) / 2.0,
            (self.southwest.lon + self.northeast.lon) / 2.0,
        )
    }

    /// Height of the cell in degrees of latitude.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    /// Width of the cell in degrees of longitude.
    #[must_use]
    pub fn lon_span(&self) -> f64 {
        self.northeast.lon - self.southwest.lon
    }

    /// Returns true if the point lies inside the cell, edges included.
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lon..=self.northeast.lon).contains(&point.lon)
    }

    /// Converts the bounds to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One of the four cardinal directions accepted by adjacency lookup.
///
/// Parses case-insensitively from `"n"`, `"s"`, `"e"` or `"w"`.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::Direction;
///
/// let north: Direction = "N".parse().unwrap();
/// assert_eq!(north, Direction::North);
/// assert!("x".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the north pole.
    #[serde(rename = "n")]
    North,
    /// Toward the south pole.
    #[serde(rename = "s")]
    South,
    /// Toward increasing longitude.
    #[serde(rename = "e")]
    East,
    /// Toward decreasing longitude.
    #[serde(rename = "w")]
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns true for north and south, the directions that can run past a pole.
    #[must_use]
    pub const fn is_meridional(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    const fn letter(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n" => Ok(Self::North),
            "s" => Ok(Self::South),
            "e" => Ok(Self::East),
            "w" => Ok(Self::West),
            _ => Err(GeohashError::InvalidDirection(s.to_string())),
        }
    }
}

/// The eight compass points of a cell's neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    /// North.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl CompassPoint {
    /// All eight points, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];
}

/// The eight cells surrounding a geohash cell.
///
/// Serializes with exactly the keys `n, ne, e, se, s, sw, w, nw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbours {
    /// Cell above.
    pub n: String,
    /// Cell east of the one above.
    pub ne: String,
    /// Cell to the right.
    pub e: String,
    /// Cell east of the one below.
    pub se: String,
    /// Cell below.
    pub s: String,
    /// Cell west of the one below.
    pub sw: String,
    /// Cell to the left.
    pub w: String,
    /// Cell west of the one above.
    pub nw: String,
}

impl Neighbours {
    /// Returns the neighbour at the given compass point.
    #[must_use]
    pub fn get(&self, point: CompassPoint) -> &str {
        match point {
            CompassPoint::N => &self.n,
            CompassPoint::NE => &self.ne,
            CompassPoint::E => &self.e,
            CompassPoint::SE => &self.se,
            CompassPoint::S => &self.s,
            CompassPoint::SW => &self.sw,
            CompassPoint::W => &self.w,
            CompassPoint::NW => &self.nw,
        }
    }

    /// Iterates the neighbours clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (CompassPoint, &str)> {
        CompassPoint::ALL.into_iter().map(|point| (point, self.get(point)))
    }

    /// Converts the neighbour set to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What adjacency lookup does when a north or south step runs past a pole.
///
/// East and west steps always wrap across the antimeridian, which is where
/// the neighbouring cell actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BorderPolicy {
    /// Fail with [`GeohashError::OutOfRange`].
    #[default]
    Reject,
    /// Return the lookup table's wrapped cell on the opposite side of the globe.
    Wrap,
}

/// Settings for a [`GeohashCodec`](crate::GeohashCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSettings {
    /// Longest geohash tried, and the fallback length, when encoding without
    /// an explicit precision.
    pub max_precision: usize,

    /// Behaviour of north/south adjacency at the poles.
    pub polar_border: BorderPolicy,
}

impl CodecSettings {
    /// Creates `CodecSettings` from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            max_precision: MAX_PRECISION,
            polar_border: BorderPolicy::default(),
        }
    }
}
