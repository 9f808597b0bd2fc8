//! Encoding, decoding and cell bounds.
//!
//! A geohash is built by repeatedly bisecting the longitude and latitude
//! ranges of the globe, alternating between the two and starting with
//! longitude. Each bisection contributes one bit; five bits make one symbol.

use log::debug;

use super::error::{GeohashError, Result};
use super::precision::{MAX_PRECISION, PRECISION_LIMIT};
use super::tables;
use super::types::{BoundingBox, Coordinate};

const BITS_PER_SYMBOL: u32 = 5;

/// A closed interval narrowed one bisection at a time.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    max: f64,
}

impl Span {
    const LATITUDE: Self = Self {
        min: -90.0,
        max: 90.0,
    };
    const LONGITUDE: Self = Self {
        min: -180.0,
        max: 180.0,
    };

    fn mid(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Keeps the upper half when `upper`, otherwise the lower half.
    fn bisect(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Returns the cell denoted by a geohash.
///
/// Input is case-insensitive.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] if the geohash is empty or
/// contains a symbol outside the base-32 alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::bounds;
///
/// let cell = bounds("u4pruy").unwrap();
/// assert_eq!(cell.southwest.lat, 57.645263671875);
/// assert_eq!(cell.northeast.lon, 10.4150390625);
/// ```
pub fn bounds(geohash: &str) -> Result<BoundingBox> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidGeohash("empty geohash".to_string()));
    }

    let mut lat = Span::LATITUDE;
    let mut lon = Span::LONGITUDE;
    let mut longitude_bit = true;

    for symbol in geohash.chars() {
        let index = tables::symbol_index(symbol).ok_or_else(|| {
            GeohashError::InvalidGeohash(format!(
                "'{symbol}' in {geohash:?} is not a geohash symbol"
            ))
        })?;

        for n in (0..BITS_PER_SYMBOL).rev() {
            let upper = (index >> n) & 1 == 1;
            if longitude_bit {
                lon.bisect(upper);
            } else {
                lat.bisect(upper);
            }
            longitude_bit = !longitude_bit;
        }
    }

    Ok(BoundingBox {
        southwest: Coordinate::new(lat.min, lon.min),
        northeast: Coordinate::new(lat.max, lon.max),
    })
}

/// Decodes a geohash to the center of its cell.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] if the geohash is empty or
/// contains a symbol outside the base-32 alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::decode;
///
/// let center = decode("u4pruy").unwrap();
/// assert!((center.lat - 57.648).abs() < 0.001);
/// assert!((center.lon - 10.4095).abs() < 0.001);
/// ```
pub fn decode(geohash: &str) -> Result<Coordinate> {
    bounds(geohash).map(|cell| cell.center())
}

/// Encodes a coordinate to a geohash of exactly `precision` symbols.
///
/// A value lying exactly on a bisection midpoint goes to the lower half.
/// Coordinates outside the globe are not rejected; they land in the edge
/// cells.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] if `lat` or `lon` is NaN or
/// infinite, or if `precision` is 0 or above [`PRECISION_LIMIT`].
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::encode;
///
/// assert_eq!(encode(57.64911, 10.40744, 6).unwrap(), "u4pruy");
/// assert!(encode(f64::NAN, 10.0, 5).is_err());
/// assert!(encode(57.64911, 10.40744, 23).is_err());
/// ```
pub fn encode(lat: f64, lon: f64, precision: usize) -> Result<String> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(GeohashError::InvalidGeohash(format!(
            "coordinate ({lat}, {lon}) is not finite"
        )));
    }
    if !(1..=PRECISION_LIMIT).contains(&precision) {
        return Err(GeohashError::InvalidGeohash(format!(
            "precision {precision} is outside 1..={PRECISION_LIMIT}"
        )));
    }

    let mut lat_span = Span::LATITUDE;
    let mut lon_span = Span::LONGITUDE;
    let mut geohash = String::with_capacity(precision);
    let mut index = 0u8;
    let mut bit = 0;
    let mut longitude_bit = true;

    while geohash.len() < precision {
        let (span, value) = if longitude_bit {
            (&mut lon_span, lon)
        } else {
            (&mut lat_span, lat)
        };
        let upper = value > span.mid();
        span.bisect(upper);
        index = (index << 1) | u8::from(upper);
        longitude_bit = !longitude_bit;

        bit += 1;
        if bit == BITS_PER_SYMBOL {
            geohash.push(tables::symbol(index));
            index = 0;
            bit = 0;
        }
    }

    Ok(geohash)
}

/// Encodes a coordinate at the shortest precision, up to
/// [`MAX_PRECISION`], whose decoded center equals the coordinate exactly.
///
/// Only coordinates that are themselves exact cell centers stop early, so
/// most inputs produce a [`MAX_PRECISION`]-symbol geohash. Prefer
/// [`encode`] with an explicit precision.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] if `lat` or `lon` is NaN or
/// infinite.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::encode_auto;
///
/// // (22.5, 22.5) is the center of the cell "s".
/// assert_eq!(encode_auto(22.5, 22.5).unwrap(), "s");
/// assert_eq!(encode_auto(57.64911, 10.40744).unwrap().len(), 12);
/// ```
pub fn encode_auto(lat: f64, lon: f64) -> Result<String> {
    encode_auto_up_to(lat, lon, MAX_PRECISION)
}

/// Same as [`encode_auto`] with a caller-chosen ceiling.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] if `lat` or `lon` is NaN or
/// infinite, or if `max_precision` is 0 or above [`PRECISION_LIMIT`].
#[allow(clippy::float_cmp)]
pub fn encode_auto_up_to(lat: f64, lon: f64, max_precision: usize) -> Result<String> {
    for precision in 1..max_precision.min(PRECISION_LIMIT + 1) {
        let geohash = encode(lat, lon, precision)?;
        let center = decode(&geohash)?;
        if center.lat == lat && center.lon == lon {
            return Ok(geohash);
        }
    }
    debug!("no exact cell center for ({lat}, {lon}), using precision {max_precision}");
    encode(lat, lon, max_precision)
}
