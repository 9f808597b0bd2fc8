//! Cell dimensions and error radii per geohash length.

/// Longest geohash produced by auto-precision encoding.
pub const MAX_PRECISION: usize = 12;

/// Longest geohash [`encode`](super::encode) accepts.
///
/// At 22 symbols each axis has been bisected 55 times, past the 53-bit
/// mantissa of an `f64`, so longer geohashes add no information.
pub const PRECISION_LIMIT: usize = 22;

/// Returns the exact size of a cell of the given length as
/// `(latitude degrees, longitude degrees)`.
///
/// Each character carries 5 bits, longitude first, so longitude receives the
/// extra bit on odd lengths.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::cell_size;
///
/// assert_eq!(cell_size(1), (45.0, 45.0));
/// assert_eq!(cell_size(2), (5.625, 11.25));
/// ```
#[must_use]
pub fn cell_size(precision: usize) -> (f64, f64) {
    let bits = precision.saturating_mul(5);
    let lon_bits = bits.div_ceil(2);
    let lat_bits = bits / 2;
    (halve(180.0, lat_bits), halve(360.0, lon_bits))
}

fn halve(span: f64, times: usize) -> f64 {
    // Any span on the globe underflows to 0.0 within 2048 halvings.
    (0..times.min(2048)).fold(span, |span, _| span / 2.0)
}

/// Approximate error radius in meters for a given geohash length.
///
/// Returns the distance from the cell center to its edge, for lengths 1 to
/// 12. Other lengths return 0.0.
///
/// # Geohash Precision Table
///
/// | Length | Error     | Use Case |
/// |--------|-----------|----------|
/// | 5      | ±2.4 km   | City |
/// | 6      | ±0.61 km  | Neighborhood |
/// | 7      | ±76 m     | Street |
/// | 8      | ±19 m     | Building |
/// | 12     | ±1.9 cm   | Survey point |
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::error_radius_meters;
///
/// assert_eq!(error_radius_meters(8), 19.0);
/// ```
#[must_use]
pub const fn error_radius_meters(precision: usize) -> f64 {
    match precision {
        1 => 2_500_000.0,
        2 => 630_000.0,
        3 => 78_000.0,
        4 => 20_000.0,
        5 => 2_400.0,
        6 => 610.0,
        7 => 76.0,
        8 => 19.0,
        9 => 2.4,
        10 => 0.6,
        11 => 0.074,
        12 => 0.019,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_length_one() {
        assert_eq!(cell_size(1), (45.0, 45.0));
    }

    #[test]
    fn cell_size_length_six() {
        // 30 bits: 15 for each axis
        let (lat, lon) = cell_size(6);
        assert_eq!(lat, 180.0 / 32_768.0);
        assert_eq!(lon, 360.0 / 32_768.0);
    }

    #[test]
    fn cell_size_zero_is_whole_globe() {
        assert_eq!(cell_size(0), (180.0, 360.0));
    }

    #[test]
    fn cell_size_shrinks_with_length() {
        for precision in 1..MAX_PRECISION {
            let (lat, lon) = cell_size(precision);
            let (next_lat, next_lon) = cell_size(precision + 1);
            assert!(next_lat < lat);
            assert!(next_lon < lon);
        }
    }

    #[test]
    fn cell_size_huge_precision_does_not_overflow() {
        assert_eq!(cell_size(usize::MAX), (0.0, 0.0));
    }

    #[test]
    fn error_radius_values() {
        assert_eq!(error_radius_meters(8), 19.0);
        assert_eq!(error_radius_meters(7), 76.0);
        assert_eq!(error_radius_meters(5), 2_400.0);
    }

    #[test]
    fn error_radius_out_of_table() {
        assert_eq!(error_radius_meters(0), 0.0);
        assert_eq!(error_radius_meters(13), 0.0);
    }

    #[test]
    fn error_radius_decreases() {
        for precision in 1..MAX_PRECISION {
            assert!(error_radius_meters(precision + 1) < error_radius_meters(precision));
        }
    }
}
