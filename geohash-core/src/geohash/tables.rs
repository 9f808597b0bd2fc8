//! Base-32 alphabet and the adjacency lookup tables.
//!
//! The neighbour and border tables are indexed by `[direction][parity]`,
//! where parity is `geohash.len() % 2`. Even- and odd-length cells have
//! transposed shapes, so each direction needs one row per parity.

use super::types::Direction;

/// Geohash base-32 alphabet (no `a`, `i`, `l` or `o`).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID: u8 = u8::MAX;

/// ASCII byte → 5-bit symbol value, `INVALID` where the byte is not a symbol.
#[allow(clippy::cast_possible_truncation)]
const DECODE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// For each direction and parity, the symbol whose position in the row gives
/// the alphabet index of the neighbouring symbol.
const NEIGHBOURS: [[&[u8; 32]; 2]; 4] = [
    // North
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    // South
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    // East
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    // West
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

/// Symbols that sit on the parent cell's edge in the given direction.
const BORDERS: [[&[u8]; 2]; 4] = [
    [b"prxz", b"bcfguvyz"],
    [b"028b", b"0145hjnp"],
    [b"bcfguvyz", b"prxz"],
    [b"0145hjnp", b"028b"],
];

const fn row(direction: Direction) -> usize {
    match direction {
        Direction::North => 0,
        Direction::South => 1,
        Direction::East => 2,
        Direction::West => 3,
    }
}

/// Returns the 5-bit value of a geohash symbol, accepting either case.
#[must_use]
pub const fn symbol_index(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    let value = DECODE[symbol.to_ascii_lowercase() as usize];
    if value == INVALID {
        None
    } else {
        Some(value)
    }
}

/// Returns the symbol for a 5-bit value.
///
/// Only the low five bits of `index` are used.
#[must_use]
pub const fn symbol(index: u8) -> char {
    BASE32[(index & 0x1f) as usize] as char
}

/// Returns true when `last` touches the parent cell's edge in `direction`.
pub(crate) fn is_border(direction: Direction, parity: usize, last: u8) -> bool {
    BORDERS[row(direction)][parity].contains(&last)
}

/// Returns the last symbol of the neighbouring cell in `direction`, or
/// `None` if `last` is not a lowercase alphabet symbol.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn neighbour_symbol(direction: Direction, parity: usize, last: u8) -> Option<char> {
    NEIGHBOURS[row(direction)][parity]
        .iter()
        .position(|&b| b == last)
        .map(|position| symbol(position as u8))
}
