//! Entry point used by map and form collaborators.

use log::debug;

use crate::geohash::{
    self, BoundingBox, CodecSettings, Coordinate, Direction, GeohashError, Neighbours, Result,
};

/// Core interface for geohash operations.
///
/// Holds only [`CodecSettings`]; every call is independent, so a codec can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct GeohashCodec {
    settings: CodecSettings,
}

impl GeohashCodec {
    /// Creates a new `GeohashCodec` with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::GeohashCodec;
    ///
    /// let codec = GeohashCodec::new();
    /// assert_eq!(codec.settings().max_precision, 12);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `GeohashCodec` with the given settings.
    #[must_use]
    pub const fn with_settings(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Returns the codec settings.
    #[must_use]
    pub const fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Updates the codec settings.
    pub fn set_settings(&mut self, settings: CodecSettings) {
        self.settings = settings;
    }

    /// Encodes a coordinate.
    ///
    /// With `Some(precision)` the geohash has exactly that many symbols.
    /// With `None` the shortest length up to `max_precision` whose center is
    /// exactly the coordinate is used, which in practice is nearly always
    /// `max_precision` itself.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidGeohash`] if a coordinate is not finite
    /// or the precision is 0 or above
    /// [`PRECISION_LIMIT`](crate::geohash::PRECISION_LIMIT).
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::GeohashCodec;
    ///
    /// let codec = GeohashCodec::new();
    /// assert_eq!(codec.encode(57.64911, 10.40744, Some(6)).unwrap(), "u4pruy");
    /// assert_eq!(codec.encode(57.64911, 10.40744, None).unwrap().len(), 12);
    /// ```
    pub fn encode(&self, lat: f64, lon: f64, precision: Option<usize>) -> Result<String> {
        match precision {
            Some(precision) => geohash::encode(lat, lon, precision),
            None => geohash::encode_auto_up_to(lat, lon, self.settings.max_precision),
        }
    }

    /// Encodes a coordinate given as text, such as form or query input.
    ///
    /// Surrounding whitespace is ignored. `precision` must be a positive
    /// integer; `None` behaves as in [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidGeohash`] if any value does not parse
    /// to a finite number, or the precision is outside
    /// `1..=`[`PRECISION_LIMIT`](crate::geohash::PRECISION_LIMIT).
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::GeohashCodec;
    ///
    /// let codec = GeohashCodec::new();
    /// let hash = codec.encode_input("57.64911", " 10.40744 ", Some("6")).unwrap();
    /// assert_eq!(hash, "u4pruy");
    /// assert!(codec.encode_input("north", "10", Some("6")).is_err());
    /// ```
    pub fn encode_input(&self, lat: &str, lon: &str, precision: Option<&str>) -> Result<String> {
        let lat = parse_degrees(lat)?;
        let lon = parse_degrees(lon)?;
        let precision = precision.map(parse_precision).transpose()?;
        self.encode(lat, lon, precision)
    }

    /// Decodes a geohash to the center of its cell.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidGeohash`] for an empty or malformed
    /// geohash.
    #[allow(clippy::unused_self)]
    pub fn decode(&self, geohash: &str) -> Result<Coordinate> {
        geohash::decode(geohash)
    }

    /// Returns the cell a geohash denotes.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidGeohash`] for an empty or malformed
    /// geohash.
    #[allow(clippy::unused_self)]
    pub fn bounds(&self, geohash: &str) -> Result<BoundingBox> {
        geohash::bounds(geohash)
    }

    /// Returns the adjacent cell in a direction given as `"n"`, `"s"`, `"e"`
    /// or `"w"` (any case).
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidDirection`] if the direction is not recognised
    /// - [`GeohashError::InvalidGeohash`] for an empty or malformed geohash
    /// - [`GeohashError::OutOfRange`] for a polar crossing under
    ///   [`BorderPolicy::Reject`](crate::geohash::BorderPolicy::Reject)
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::GeohashCodec;
    ///
    /// let codec = GeohashCodec::new();
    /// assert_eq!(codec.adjacent("ezs42", "n").unwrap(), "ezs48");
    /// assert!(codec.adjacent("ezs42", "x").is_err());
    /// ```
    pub fn adjacent(&self, geohash: &str, direction: &str) -> Result<String> {
        let direction: Direction = direction.parse()?;
        geohash::adjacent_with(geohash, direction, self.settings.polar_border)
    }

    /// Returns all eight cells surrounding a geohash.
    ///
    /// # Errors
    ///
    /// Same as [`adjacent`](Self::adjacent), apart from direction errors.
    pub fn neighbours(&self, geohash: &str) -> Result<Neighbours> {
        geohash::neighbours_with(geohash, self.settings.polar_border)
    }
}

fn parse_degrees(text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|_| {
        debug!("rejecting coordinate input {text:?}");
        GeohashError::InvalidGeohash(format!("{text:?} is not a number"))
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("rejecting non-finite coordinate input {text:?}");
        Err(GeohashError::InvalidGeohash(format!(
            "{text:?} is not a finite number"
        )))
    }
}

fn parse_precision(text: &str) -> Result<usize> {
    text.trim().parse().map_err(|_| {
        debug!("rejecting precision input {text:?}");
        GeohashError::InvalidGeohash(format!("{text:?} is not a valid precision"))
    })
}
