//! Integration tests for the public geohash API.
//!
//! These tests cover the reference values every geohash implementation must
//! agree on, the error kinds surfaced to callers, and the JSON shapes handed
//! to map collaborators.

#![allow(clippy::float_cmp)]

use geohash_core::geohash::{
    self, BorderPolicy, CodecSettings, CompassPoint, Coordinate, Direction, GeohashError,
};
use geohash_core::GeohashCodec;

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn encode_reference_coordinate() {
    assert_eq!(geohash::encode(57.649_11, 10.407_44, 6).unwrap(), "u4pruy");
}

#[test]
fn decode_reference_geohash_within_half_cell() {
    let center = geohash::decode("u4pruy").unwrap();
    let (lat_size, lon_size) = geohash::cell_size(6);

    assert!((center.lat - 57.648).abs() <= lat_size / 2.0);
    assert!((center.lon - 10.407).abs() <= lon_size / 2.0);
}

#[test]
fn bounds_bracket_decoded_center_symmetrically() {
    let cell = geohash::bounds("u4pruy").unwrap();
    let center = geohash::decode("u4pruy").unwrap();

    let south = center.lat - cell.southwest.lat;
    let north = cell.northeast.lat - center.lat;
    let west = center.lon - cell.southwest.lon;
    let east = cell.northeast.lon - center.lon;

    assert_eq!(south, north);
    assert_eq!(west, east);
    assert!(cell.contains(&Coordinate::new(57.649_11, 10.407_44)));
}

#[test]
fn bounds_match_cell_size() {
    for geohash in ["u", "u4", "u4p", "u4pruy", "u4pruydqqvj8"] {
        let cell = geohash::bounds(geohash).unwrap();
        let (lat_size, lon_size) = geohash::cell_size(geohash.len());
        assert_eq!(cell.lat_span(), lat_size, "{geohash}");
        assert_eq!(cell.lon_span(), lon_size, "{geohash}");
    }
}

#[test]
fn adjacent_reference_geohash() {
    assert_eq!(
        geohash::adjacent("ezs42", Direction::North).unwrap(),
        "ezs48"
    );
}

#[test]
fn neighbours_reference_geohash() {
    let around = geohash::neighbours("ezs42").unwrap();
    for point in CompassPoint::ALL {
        let cell = around.get(point);
        assert_eq!(cell.len(), 5, "{point:?}");
        assert!(geohash::bounds(cell).is_ok(), "{point:?} -> {cell}");
    }
    assert_eq!(around.ne, "ezs49");
    assert_eq!(around.se, "ezs41");
    assert_eq!(around.nw, "ezefx");
}

#[test]
fn neighbours_json_has_exactly_eight_keys() {
    let around = geohash::neighbours("ezs42").unwrap();
    let json: serde_json::Value = serde_json::from_str(&around.to_json().unwrap()).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["e", "n", "ne", "nw", "s", "se", "sw", "w"]);
    assert_eq!(object["n"], "ezs48");
}

#[test]
fn neighbours_surround_the_cell() {
    let cell = geohash::bounds("u4pruy").unwrap();
    let around = geohash::neighbours("u4pruy").unwrap();

    let north = geohash::bounds(&around.n).unwrap();
    assert_eq!(north.southwest.lat, cell.northeast.lat);
    assert_eq!(north.southwest.lon, cell.southwest.lon);

    let east = geohash::bounds(&around.e).unwrap();
    assert_eq!(east.southwest.lon, cell.northeast.lon);

    let southwest = geohash::bounds(&around.sw).unwrap();
    assert_eq!(southwest.northeast.lat, cell.southwest.lat);
    assert_eq!(southwest.northeast.lon, cell.southwest.lon);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn empty_bounds_is_invalid_geohash() {
    assert!(matches!(
        geohash::bounds("").unwrap_err(),
        GeohashError::InvalidGeohash(_)
    ));
}

#[test]
fn nan_encode_is_invalid_geohash() {
    assert!(matches!(
        geohash::encode(f64::NAN, 10.0, 5).unwrap_err(),
        GeohashError::InvalidGeohash(_)
    ));
}

#[test]
fn unknown_direction_is_invalid_direction() {
    let codec = GeohashCodec::new();
    let err = codec.adjacent("ezs42", "x").unwrap_err();
    assert!(matches!(err, GeohashError::InvalidDirection(ref d) if d == "x"));
    assert_eq!(err.to_string(), "Invalid direction: x");
}

#[test]
fn direction_is_checked_before_geohash() {
    let codec = GeohashCodec::new();
    assert!(matches!(
        codec.adjacent("", "x").unwrap_err(),
        GeohashError::InvalidDirection(_)
    ));
}

#[test]
fn polar_neighbours_follow_settings() {
    let strict = GeohashCodec::new();
    assert!(matches!(
        strict.neighbours("upb").unwrap_err(),
        GeohashError::OutOfRange { .. }
    ));

    let wrapping = GeohashCodec::with_settings(CodecSettings {
        polar_border: BorderPolicy::Wrap,
        ..CodecSettings::default()
    });
    let around = wrapping.neighbours("upb").unwrap();
    assert!(around.iter().all(|(_, cell)| cell.len() == 3));
}

// ============================================================================
// Collaborator flow
// ============================================================================

/// A map picks a point, stores the 12-symbol code, and later recentres on it.
#[test]
fn map_selection_roundtrip() {
    let codec = GeohashCodec::new();
    let picked = Coordinate::new(37.774_929_5, -122.419_415_5);

    let code = codec.encode(picked.lat, picked.lon, Some(12)).unwrap();
    let restored = codec.decode(&code).unwrap();

    assert_eq!(code.len(), 12);
    assert!((restored.lat - picked.lat).abs() < 1e-6);
    assert!((restored.lon - picked.lon).abs() < 1e-6);
}

#[test]
fn uppercase_input_gives_lowercase_output() {
    let codec = GeohashCodec::new();
    assert_eq!(codec.adjacent("EZS42", "N").unwrap(), "ezs48");
    assert_eq!(codec.neighbours("EZS42").unwrap(), codec.neighbours("ezs42").unwrap());
    assert_eq!(codec.bounds("EZS42").unwrap(), codec.bounds("ezs42").unwrap());
}

#[test]
fn codec_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeohashCodec>();
    assert_send_sync::<GeohashError>();

    let codec = GeohashCodec::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let codec = &codec;
                scope.spawn(move || {
                    let lat = f64::from(i).mul_add(10.0, 5.0);
                    codec.encode(lat, 10.0, Some(8)).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 8);
        }
    });
}
