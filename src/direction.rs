use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

/// Movement vectors for each direction, indexed by discriminant.
///
/// Four o'clock points toward the southeast; subsequent entries proceed
/// counterclockwise around the hexagon.
const DIRECTION_VECTORS: [(i32, i32, i32); 6] = [
    (1, 0, -1),
    (1, -1, 0),
    (0, -1, 1),
    (-1, 0, 1),
    (-1, 1, 0),
    (0, 1, -1),
];

/// Direction in a cubic hexagonal coordinate system.
///
/// Directions are named for positions on a clock face, assuming the major
/// orientation of the grid is horizontal: four o'clock is the southeastern
/// neighbor, and variants proceed counterclockwise from there.
///
/// The discriminants are a serialization contract: callers which store a
/// direction by number must agree on this assignment, so it must not be
/// reordered.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    #[display("four o'clock")]
    FourOclock = 0,
    #[display("two o'clock")]
    TwoOclock = 1,
    #[display("twelve o'clock")]
    TwelveOclock = 2,
    #[display("ten o'clock")]
    TenOclock = 3,
    #[display("eight o'clock")]
    EightOclock = 4,
    #[display("six o'clock")]
    SixOclock = 5,
}

impl Direction {
    /// Iterate through all `Direction`s, counterclockwise from `FourOclock`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::FourOclock), |direction| {
            use Direction::*;

            match direction {
                FourOclock => Some(TwoOclock),
                TwoOclock => Some(TwelveOclock),
                TwelveOclock => Some(TenOclock),
                TenOclock => Some(EightOclock),
                EightOclock => Some(SixOclock),
                SixOclock => None,
            }
        })
    }

    /// The `(Δq, Δr, Δs)` step which moving in this direction applies.
    ///
    /// Every step sums to zero, so moving preserves the cubic constraint.
    pub const fn delta(self) -> (i32, i32, i32) {
        DIRECTION_VECTORS[self as usize]
    }

    /// Numeric code of this direction.
    ///
    /// Stable across versions; the inverse of `Direction::try_from(u8)`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The direction pointing the opposite way.
    ///
    /// Stepping in a direction and then in its opposite returns to the
    /// starting coordinate.
    pub const fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            FourOclock => TenOclock,
            TwoOclock => EightOclock,
            TwelveOclock => SixOclock,
            TenOclock => FourOclock,
            EightOclock => TwoOclock,
            SixOclock => TwelveOclock,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Direction::*;

        match value {
            0 => Ok(FourOclock),
            1 => Ok(TwoOclock),
            2 => Ok(TwelveOclock),
            3 => Ok(TenOclock),
            4 => Ok(EightOclock),
            5 => Ok(SixOclock),
            _ => Err(()),
        }
    }
}
