use std::convert::TryFrom;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Cubic hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. The fields are private so that every
/// reachable value satisfies the constraint; construct through
/// [`HexCoordinate::from_axial`] (infallible) or
/// [`HexCoordinate::from_cubic`] (checked).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    parse_display::Display,
    Serialize,
    Deserialize,
)]
#[display("({q}, {r}, {s})")]
#[serde(try_from = "(i32, i32, i32)", into = "(i32, i32, i32)")]
pub struct HexCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

/// The cubic components of a coordinate did not sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid cubic coordinates ({q}, {r}, {s}): components must sum to 0, not {}", .q + .r + .s)]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl HexCoordinate {
    /// The coordinate at `(0, 0, 0)`.
    ///
    /// A plain constant, not a singleton: independent values equal to the
    /// origin may freely coexist.
    pub const ORIGIN: HexCoordinate = HexCoordinate { q: 0, r: 0, s: 0 };

    /// Construct from an explicit cubic triple.
    ///
    /// Fails with [`InvalidCoordinate`] unless `q + r + s == 0`. When the
    /// triple is not already in hand, prefer [`HexCoordinate::from_axial`],
    /// which cannot fail.
    pub fn from_cubic(q: i32, r: i32, s: i32) -> Result<HexCoordinate, InvalidCoordinate> {
        if q + r + s == 0 {
            Ok(HexCoordinate { q, r, s })
        } else {
            Err(InvalidCoordinate { q, r, s })
        }
    }

    /// Construct from axial coordinates, computing `s = -q - r`.
    ///
    /// Axial coordinates cannot express an inconsistent triple, so this
    /// never fails.
    pub const fn from_axial(q: i32, r: i32) -> HexCoordinate {
        HexCoordinate { q, r, s: -q - r }
    }

    /// The coordinate at `(0, 0, 0)`. Equivalent to [`HexCoordinate::ORIGIN`].
    pub const fn origin() -> HexCoordinate {
        HexCoordinate::ORIGIN
    }

    #[inline]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// The axial `(q, r)` pair for this coordinate.
    #[inline]
    pub const fn axial(self) -> (i32, i32) {
        (self.q, self.r)
    }

    /// `true` for the coordinate at `(0, 0, 0)`.
    #[inline]
    pub const fn is_origin(self) -> bool {
        self.q == 0 && self.r == 0 && self.s == 0
    }

    /// The coordinate one step away in the given direction.
    ///
    /// Pure geometry: this answers "where would the neighbor be", regardless
    /// of whether any caller has a cell stored there.
    pub fn neighbor(self, direction: Direction) -> HexCoordinate {
        let (dq, dr, ds) = direction.delta();
        HexCoordinate {
            q: self.q + dq,
            r: self.r + dr,
            s: self.s + ds,
        }
    }

    /// All six neighboring coordinates, each paired with its direction.
    ///
    /// Exhaustive and duplicate-free; every entry is at distance 1.
    pub fn neighbor_coordinates(self) -> [(Direction, HexCoordinate); 6] {
        let mut neighbors = [(Direction::FourOclock, self); 6];
        for (slot, direction) in neighbors.iter_mut().zip(Direction::iter()) {
            *slot = (direction, self + direction);
        }
        neighbors
    }

    /// Iterate over the six neighboring coordinates.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = HexCoordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Number of single-step moves separating two coordinates.
    ///
    /// `max(|Δq|, |Δr|, |Δs|)`, the standard hex metric. Symmetric, and zero
    /// exactly when the coordinates are equal.
    pub fn distance_to(self, other: HexCoordinate) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s - other.s).unsigned_abs();
        dq.max(dr).max(ds)
    }
}

impl AddAssign<Direction> for HexCoordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self = self.neighbor(rhs);
    }
}

impl Add<Direction> for HexCoordinate {
    type Output = HexCoordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl TryFrom<(i32, i32, i32)> for HexCoordinate {
    type Error = InvalidCoordinate;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        HexCoordinate::from_cubic(q, r, s)
    }
}

impl From<HexCoordinate> for (i32, i32, i32) {
    fn from(coordinate: HexCoordinate) -> Self {
        (coordinate.q, coordinate.r, coordinate.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use std::collections::HashSet;

    /// Every coordinate with axial components in `-range..=range`.
    fn small_grid(range: i32) -> impl Iterator<Item = HexCoordinate> {
        iproduct!(-range..=range, -range..=range)
            .map(|(q, r)| HexCoordinate::from_axial(q, r))
    }

    #[test]
    fn from_axial_satisfies_the_constraint() {
        for (q, r) in iproduct!(-10..=10, -10..=10) {
            let coordinate = HexCoordinate::from_axial(q, r);
            assert_eq!(coordinate.s(), -q - r);
            assert_eq!(coordinate.q() + coordinate.r() + coordinate.s(), 0);
        }
    }

    #[test]
    fn from_cubic_accepts_exactly_the_zero_sum_triples() {
        for (q, r, s) in iproduct!(-4..=4, -4..=4, -4..=4) {
            let result = HexCoordinate::from_cubic(q, r, s);
            if q + r + s == 0 {
                let coordinate = result.unwrap();
                assert_eq!((coordinate.q(), coordinate.r(), coordinate.s()), (q, r, s));
                assert_eq!(coordinate, HexCoordinate::from_axial(q, r));
            } else {
                assert_eq!(result, Err(InvalidCoordinate { q, r, s }));
            }
        }
    }

    #[test]
    fn from_cubic_examples() {
        assert!(HexCoordinate::from_cubic(1, 1, 1).is_err());
        assert!(HexCoordinate::from_cubic(1, -1, 0).is_ok());
    }

    #[test]
    fn origin_is_origin() {
        assert!(HexCoordinate::ORIGIN.is_origin());
        assert!(HexCoordinate::origin().is_origin());
        assert_eq!(HexCoordinate::ORIGIN, HexCoordinate::from_axial(0, 0));
    }

    #[test]
    fn is_origin_iff_distance_to_origin_is_zero() {
        for coordinate in small_grid(3) {
            assert_eq!(
                coordinate.is_origin(),
                coordinate.distance_to(HexCoordinate::ORIGIN) == 0
            );
        }
    }

    #[test]
    fn neighbors_remain_valid() {
        for coordinate in small_grid(3) {
            for neighbor in coordinate.neighbors() {
                assert_eq!(neighbor.q() + neighbor.r() + neighbor.s(), 0);
            }
        }
    }

    #[test]
    fn a_step_and_its_opposite_cancel() {
        for coordinate in small_grid(2) {
            for direction in Direction::iter() {
                assert_eq!(coordinate + direction + direction.opposite(), coordinate);
            }
        }
        assert_eq!(
            HexCoordinate::ORIGIN + Direction::FourOclock + Direction::TenOclock,
            HexCoordinate::ORIGIN,
        );
    }

    #[test]
    fn distance_is_a_metric() {
        let grid: Vec<_> = small_grid(2).collect();

        for &a in &grid {
            assert_eq!(a.distance_to(a), 0);
        }
        for (&a, &b) in iproduct!(&grid, &grid) {
            assert_eq!(a.distance_to(b), b.distance_to(a));
            assert_eq!(a.distance_to(b) == 0, a == b);
        }
        for (&a, &b, &c) in iproduct!(&grid, &grid, &grid) {
            assert!(a.distance_to(b) <= a.distance_to(c) + c.distance_to(b));
        }
    }

    #[test]
    fn worked_example_from_the_origin() {
        let origin = HexCoordinate::ORIGIN;
        let southeast = origin + Direction::FourOclock;

        assert_eq!(southeast, HexCoordinate::from_cubic(1, 0, -1).unwrap());
        assert_eq!(origin.distance_to(southeast), 1);
        assert_eq!(
            origin.distance_to(HexCoordinate::from_cubic(2, -1, -1).unwrap()),
            2
        );
    }

    #[test]
    fn neighbor_coordinates_are_exhaustive_and_distinct() {
        for coordinate in small_grid(2) {
            let neighbors = coordinate.neighbor_coordinates();

            let directions: HashSet<_> =
                neighbors.iter().map(|&(direction, _)| direction).collect();
            assert_eq!(directions.len(), 6);

            let coordinates: HashSet<_> =
                neighbors.iter().map(|&(_, neighbor)| neighbor).collect();
            assert_eq!(coordinates.len(), 6);

            for &(direction, neighbor) in &neighbors {
                assert_eq!(neighbor, coordinate.neighbor(direction));
                assert_eq!(coordinate.distance_to(neighbor), 1);
            }
        }
    }

    #[test]
    fn display_shows_the_cubic_triple() {
        assert_eq!(HexCoordinate::from_axial(1, -3).to_string(), "(1, -3, 2)");
        assert_eq!(HexCoordinate::ORIGIN.to_string(), "(0, 0, 0)");
    }
}
