//! Cubic-coordinate hexagonal grid support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)
//!
//! A [`HexCoordinate`] is an immutable `(q, r, s)` value with `q + r + s == 0`;
//! the six [`Direction`]s connect it to its neighbors. [`HexMap`] stores tiles
//! at coordinates and joins stored cells against the pure geometry.

pub mod coordinate;
pub mod direction;
pub mod map;

pub use coordinate::{HexCoordinate, InvalidCoordinate};
pub use direction::Direction;
pub use map::HexMap;
