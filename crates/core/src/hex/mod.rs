//! This module holds the hex coordinate types and the algorithms that operate
//! on them.
//!
//! ## Coordinate Systems
//!
//! Cells are pointy-topped hexagons: each one has a vertex at the top and
//! bottom, and flat sides facing east and west. There are three ways to name
//! a cell, and they all name the same cells:
//!
//! ### Cube
//!
//! [CubeCoordinates] are the canonical system, defined by [Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three integer components, `q`, `r` and `s`, and **for
//! any cell `q + r + s = 0`.** The third component is redundant, but keeping
//! it makes the math much simpler: distance is the largest of the three
//! component deltas, and each of the six neighbors is reached by adding one
//! fixed delta (see [Direction]). All algorithms are defined here.
//!
//! ### Axial
//!
//! [AxialCoordinates] are cube coordinates with one component dropped. Note
//! that the component we keep as `r` is cube **`s`**, so axial `(q, r)` is cube
//! `(q, -q-r, r)`. This is also the form that [HexGrid](crate::HexGrid) uses
//! to place a cell on the plane.
//!
//! ### Offset
//!
//! [OffsetCoordinates] are a column/row pair. Rows are cube `r`, and every
//! odd row is shifted half a cell to the right ("odd-r" layout). These map
//! directly onto a rectangular array, which makes them the best choice for
//! storage. Convert to cube space before doing any math on them though.
//!
//! ### Float Coordinates
//!
//! [FloatCubic] and [FloatAxial] hold fractional positions. They only exist
//! on the way from the plane to a cell, and get rounded to [CubeCoordinates]
//! right away.

mod algorithm;
mod direction;
mod float;
mod unit;

pub use self::{direction::*, float::*, unit::*};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of cube coordinates
pub type CubeSet = HashSet<CubeCoordinates, FnvBuildHasher>;
/// A map of cube coordinates to some `T`
pub type CubeMap<T> = HashMap<CubeCoordinates, T, FnvBuildHasher>;
/// An ORDERED map of cube coordinates to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering.
pub type CubeIndexMap<T> = IndexMap<CubeCoordinates, T, FnvBuildHasher>;
