use std::collections::HashMap;
use std::iter::FromIterator;

use crate::{Direction, HexCoordinate};

/// A sparse store of tiles keyed by hex coordinate.
///
/// Geometry is total: every coordinate has six neighbor coordinates, whether
/// or not anything is stored there. Storage is partial: a neighbor _cell_
/// exists only once a tile has been inserted at its coordinate. The lookup
/// methods keep that distinction explicit by reporting absent cells as
/// `None` rather than treating them as errors.
#[derive(Clone, Debug)]
pub struct HexMap<Tile> {
    cells: HashMap<HexCoordinate, Tile>,
}

impl<Tile> HexMap<Tile> {
    pub fn new() -> HexMap<Tile> {
        HexMap {
            cells: HashMap::new(),
        }
    }

    /// Number of stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` when a cell is stored at this coordinate.
    #[inline]
    pub fn contains(&self, coordinate: HexCoordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    pub fn get(&self, coordinate: HexCoordinate) -> Option<&Tile> {
        self.cells.get(&coordinate)
    }

    pub fn get_mut(&mut self, coordinate: HexCoordinate) -> Option<&mut Tile> {
        self.cells.get_mut(&coordinate)
    }

    /// Store a tile at a coordinate, returning the displaced tile if the
    /// cell already existed.
    pub fn insert(&mut self, coordinate: HexCoordinate, tile: Tile) -> Option<Tile> {
        self.cells.insert(coordinate, tile)
    }

    pub fn remove(&mut self, coordinate: HexCoordinate) -> Option<Tile> {
        self.cells.remove(&coordinate)
    }

    /// Fetch the cell at a coordinate, inserting a fresh tile if absent.
    ///
    /// The flag is `true` when the tile was created by this call. No
    /// default tile is constructed when the cell already exists.
    pub fn get_or_create(
        &mut self,
        coordinate: HexCoordinate,
        default: impl FnOnce() -> Tile,
    ) -> (&mut Tile, bool) {
        let mut created = false;
        let tile = self.cells.entry(coordinate).or_insert_with(|| {
            created = true;
            default()
        });
        (tile, created)
    }

    /// Fetch the cell at `(0, 0, 0)`, inserting a fresh tile if absent.
    pub fn get_or_create_origin(&mut self, default: impl FnOnce() -> Tile) -> (&mut Tile, bool) {
        self.get_or_create(HexCoordinate::ORIGIN, default)
    }

    /// For each direction, the neighboring coordinate and its stored tile.
    ///
    /// Always six entries, in direction-table order; a coordinate with no
    /// stored cell pairs with `None`.
    pub fn neighbor_cells(
        &self,
        coordinate: HexCoordinate,
    ) -> [(Direction, HexCoordinate, Option<&Tile>); 6] {
        coordinate
            .neighbor_coordinates()
            .map(|(direction, neighbor)| (direction, neighbor, self.cells.get(&neighbor)))
    }

    /// The neighboring cells which actually exist in the store.
    pub fn existing_neighbors(
        &self,
        coordinate: HexCoordinate,
    ) -> impl Iterator<Item = (Direction, HexCoordinate, &Tile)> {
        Direction::iter().filter_map(move |direction| {
            let neighbor = coordinate + direction;
            self.cells.get(&neighbor).map(|tile| (direction, neighbor, tile))
        })
    }

    /// Iterate over the stored cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (HexCoordinate, &Tile)> {
        self.cells.iter().map(|(&coordinate, tile)| (coordinate, tile))
    }

    /// Iterate over the coordinates of the stored cells in arbitrary order.
    pub fn coordinates(&self) -> impl Iterator<Item = HexCoordinate> + '_ {
        self.cells.keys().copied()
    }
}

impl<Tile> Default for HexMap<Tile> {
    fn default() -> Self {
        HexMap::new()
    }
}

impl<Tile> FromIterator<(HexCoordinate, Tile)> for HexMap<Tile> {
    fn from_iter<I: IntoIterator<Item = (HexCoordinate, Tile)>>(iter: I) -> Self {
        HexMap {
            cells: iter.into_iter().collect(),
        }
    }
}
