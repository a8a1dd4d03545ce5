use crate::{
    config::GridConfig,
    hex::{CubeCoordinates, CubeIndexMap, OffsetCoordinates},
    timed,
};
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use validator::Validate;

/// A cell in a grid, plus whatever the caller wants to store in it
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexTile<T = ()> {
    pub coordinates: CubeCoordinates,
    pub data: T,
}

impl<T> HexTile<T> {
    pub fn new(coordinates: CubeCoordinates, data: T) -> Self {
        Self { coordinates, data }
    }

    /// Get this tile's neighbors out of a row-major grid with the given
    /// dimensions. Neighbors that would fall off the edge of the grid are
    /// left out, so tiles along the edges have fewer than six. The output is
    /// in clockwise order starting east.
    pub fn neighbors<'a>(
        &self,
        grid: &'a [HexTile<T>],
        rows: usize,
        columns: usize,
    ) -> Vec<&'a HexTile<T>> {
        self.coordinates
            .neighbors()
            .iter()
            .filter_map(|neighbor| {
                grid_index(neighbor.to_offset(), rows, columns)
            })
            .filter_map(|index| grid.get(index))
            .collect()
    }
}

/// Get the index of a cell in a row-major list, or `None` if it's outside
/// the grid
fn grid_index(
    offset: OffsetCoordinates,
    rows: usize,
    columns: usize,
) -> Option<usize> {
    let x = usize::try_from(offset.x).ok()?;
    let y = usize::try_from(offset.y).ok()?;
    if x < columns && y < rows {
        Some(y * columns + x)
    } else {
        None
    }
}

/// A rectangular grid of tiles, stored as a flat row-major list. The tile at
/// column `x` and row `y` lives at index `y * columns + x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileGrid<T = ()> {
    rows: usize,
    columns: usize,
    tiles: Vec<HexTile<T>>,
}

impl<T> TileGrid<T> {
    /// Build a grid, filling each tile with data from the initializer. The
    /// initializer is called once per tile, in row-major order.
    pub fn new(
        rows: usize,
        columns: usize,
        mut initializer: impl FnMut(CubeCoordinates) -> T,
    ) -> Self {
        let tiles: Vec<HexTile<T>> =
            timed!(format!("Building {}x{} tile grid", rows, columns), {
                let mut tiles = Vec::with_capacity(rows * columns);
                for y in 0..rows {
                    for x in 0..columns {
                        let coordinates =
                            OffsetCoordinates::new(x as i32, y as i32)
                                .to_cubic();
                        tiles.push(HexTile::new(
                            coordinates,
                            initializer(coordinates),
                        ));
                    }
                }
                tiles
            });
        debug!("Built tile grid with {} tiles", tiles.len());

        Self {
            rows,
            columns,
            tiles,
        }
    }

    /// Build a grid with the dimensions from a config. Fails if the config
    /// doesn't pass validation.
    pub fn from_config(
        config: &GridConfig,
        initializer: impl FnMut(CubeCoordinates) -> T,
    ) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        Ok(Self::new(config.rows, config.columns, initializer))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[HexTile<T>] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<HexTile<T>> {
        self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexTile<T>> {
        self.tiles.iter()
    }

    /// Get the list index of the tile at the given position, if it's in the
    /// grid
    pub fn index_of(&self, offset: OffsetCoordinates) -> Option<usize> {
        grid_index(offset, self.rows, self.columns)
    }

    pub fn get(&self, offset: OffsetCoordinates) -> Option<&HexTile<T>> {
        self.index_of(offset).and_then(|index| self.tiles.get(index))
    }

    pub fn get_mut(
        &mut self,
        offset: OffsetCoordinates,
    ) -> Option<&mut HexTile<T>> {
        let index = self.index_of(offset)?;
        self.tiles.get_mut(index)
    }

    pub fn get_by_coordinates(
        &self,
        coordinates: CubeCoordinates,
    ) -> Option<&HexTile<T>> {
        self.get(coordinates.to_offset())
    }

    /// Get the in-bounds neighbors of a tile. See [HexTile::neighbors].
    pub fn neighbors(&self, tile: &HexTile<T>) -> Vec<&HexTile<T>> {
        tile.neighbors(&self.tiles, self.rows, self.columns)
    }

    /// Build a lookup from each tile's coordinates to its list index. The map
    /// iterates in the same order as the grid.
    pub fn index_by_coordinates(&self) -> CubeIndexMap<usize> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (tile.coordinates, index))
            .collect()
    }

    /// Convert each tile's data, keeping the layout
    pub fn map<U>(
        self,
        mut mapper: impl FnMut(HexTile<T>) -> U,
    ) -> TileGrid<U> {
        TileGrid {
            rows: self.rows,
            columns: self.columns,
            tiles: self
                .tiles
                .into_iter()
                .map(|tile| HexTile::new(tile.coordinates, mapper(tile)))
                .collect(),
        }
    }
}
