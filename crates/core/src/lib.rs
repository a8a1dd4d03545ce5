//! Hexmap is a coordinate library for hex tile grids. It converts between the
//! common hex coordinate systems, answers the usual grid queries (neighbors,
//! distance, lines, rings, spirals, areas) and maps cells to and from points
//! on the plane. Storage, pathfinding and rendering are left to the caller.
//!
//! ```
//! use hexmap::{Direction, HexGrid, OffsetCoordinates};
//!
//! let center = OffsetCoordinates::new(4, 3).to_cubic();
//! let ring = center.ring_around(2, Direction::E).unwrap();
//! assert_eq!(ring.len(), 12);
//!
//! let grid = HexGrid::new(10.0);
//! let point = grid.axial_to_point(center.to_axial());
//! assert_eq!(grid.point_to_cubic(point), center);
//! ```
//!
//! See the [hex] module for a description of each coordinate system.

mod config;
mod error;
mod grid;
pub mod hex;
mod util;

pub use crate::{
    config::GridConfig,
    error::{HexError, HexResult},
    grid::{
        HexGrid, HexTile, Hexagon, TileGrid, ONE_THIRD, SQRT_3, TWO_THIRDS,
    },
    hex::{
        AxialCoordinates, CubeCoordinates, CubeIndexMap, CubeMap, CubeSet,
        Diagonal, Direction, FloatAxial, FloatCubic, HexDirection,
        OffsetCoordinates, Parity, Rotation,
    },
    util::{area_len, vec2d::Vec2D},
};
