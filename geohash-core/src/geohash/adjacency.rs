//! Adjacent-cell lookup.
//!
//! The last symbol of a geohash is replaced through the neighbour table. When
//! that symbol sits on its parent's edge in the direction of travel, the
//! parent itself is first stepped in the same direction, recursively. Depth
//! is bounded by the geohash length.

use log::{debug, trace};

use super::error::{GeohashError, Result};
use super::tables;
use super::types::{BorderPolicy, Direction, Neighbours};

/// Returns the geohash of the cell adjacent to `geohash` in `direction`.
///
/// Input is case-insensitive; output is lowercase and has the same length.
/// East and west steps wrap across the antimeridian. North and south steps
/// past a pole are rejected; see [`adjacent_with`] to wrap them instead.
///
/// # Errors
///
/// - [`GeohashError::InvalidGeohash`] if the geohash is empty or contains a
///   symbol outside the base-32 alphabet
/// - [`GeohashError::OutOfRange`] if the step would cross a pole
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::{adjacent, Direction};
///
/// assert_eq!(adjacent("ezs42", Direction::North).unwrap(), "ezs48");
/// ```
pub fn adjacent(geohash: &str, direction: Direction) -> Result<String> {
    adjacent_with(geohash, direction, BorderPolicy::default())
}

/// Same as [`adjacent`] with an explicit policy for polar crossings.
///
/// # Errors
///
/// - [`GeohashError::InvalidGeohash`] if the geohash is empty or contains a
///   symbol outside the base-32 alphabet
/// - [`GeohashError::OutOfRange`] if the step would cross a pole and `policy`
///   is [`BorderPolicy::Reject`]
pub fn adjacent_with(
    geohash: &str,
    direction: Direction,
    policy: BorderPolicy,
) -> Result<String> {
    let normalized = normalize(geohash)?;
    step(&normalized, direction, policy, geohash)
}

/// Returns all eight cells surrounding `geohash`.
///
/// Diagonals are two steps: north-east is east of the northern neighbour,
/// south-west is west of the southern one, and so on.
///
/// # Errors
///
/// Same as [`adjacent`]. A cell touching a pole fails with
/// [`GeohashError::OutOfRange`]; use [`neighbours_with`] and
/// [`BorderPolicy::Wrap`] to get the wrapped set instead.
///
/// # Examples
///
/// ```
/// use geohash_core::geohash::neighbours;
///
/// let around = neighbours("ezs42").unwrap();
/// assert_eq!(around.n, "ezs48");
/// assert_eq!(around.sw, "ezefp");
/// ```
pub fn neighbours(geohash: &str) -> Result<Neighbours> {
    neighbours_with(geohash, BorderPolicy::default())
}

/// Same as [`neighbours`] with an explicit policy for polar crossings.
///
/// # Errors
///
/// Same as [`adjacent_with`].
pub fn neighbours_with(geohash: &str, policy: BorderPolicy) -> Result<Neighbours> {
    let adjacent = |cell: &str, direction| adjacent_with(cell, direction, policy);

    let n = adjacent(geohash, Direction::North)?;
    let s = adjacent(geohash, Direction::South)?;

    Ok(Neighbours {
        ne: adjacent(&n, Direction::East)?,
        nw: adjacent(&n, Direction::West)?,
        se: adjacent(&s, Direction::East)?,
        sw: adjacent(&s, Direction::West)?,
        e: adjacent(geohash, Direction::East)?,
        w: adjacent(geohash, Direction::West)?,
        n,
        s,
    })
}

/// Lowercases and validates every symbol.
fn normalize(geohash: &str) -> Result<String> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidGeohash("empty geohash".to_string()));
    }
    if let Some(symbol) = geohash.chars().find(|&c| tables::symbol_index(c).is_none()) {
        return Err(GeohashError::InvalidGeohash(format!(
            "'{symbol}' in {geohash:?} is not a geohash symbol"
        )));
    }
    Ok(geohash.to_ascii_lowercase())
}

/// `geohash` is non-empty, lowercase and valid. `origin` is the caller's
/// input, kept for error reporting.
fn step(
    geohash: &str,
    direction: Direction,
    policy: BorderPolicy,
    origin: &str,
) -> Result<String> {
    let (parent, last) = geohash.split_at(geohash.len() - 1);
    let last = last.as_bytes()[0];
    let parity = geohash.len() % 2;

    let on_border = tables::is_border(direction, parity, last);

    let mut cell = if on_border && !parent.is_empty() {
        trace!("{geohash} touches its parent's {direction} edge, stepping {parent}");
        step(parent, direction, policy, origin)?
    } else if on_border && direction.is_meridional() {
        match policy {
            BorderPolicy::Reject => {
                debug!("rejecting {direction} step from {origin}: beyond the pole");
                return Err(GeohashError::OutOfRange {
                    geohash: origin.to_string(),
                    direction,
                });
            }
            BorderPolicy::Wrap => {
                debug!("wrapping {direction} step from {origin} over the pole");
                String::new()
            }
        }
    } else {
        // Interior symbol, or a root east/west border that wraps at the antimeridian.
        parent.to_string()
    };

    let symbol = tables::neighbour_symbol(direction, parity, last).ok_or_else(|| {
        GeohashError::InvalidGeohash(format!("{origin:?} is not a lowercase geohash"))
    })?;
    cell.push(symbol);
    Ok(cell)
}
