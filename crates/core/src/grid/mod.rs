//! Mapping between hex cells and the 2D plane. Hexes are pointy-topped and
//! laid out in odd-r rows, and the plane uses screen orientation (y grows
//! downward), so row 0 is at the top.

mod hexagon;
mod tile;

pub use self::{hexagon::*, tile::*};
use crate::{
    config::GridConfig,
    error::{HexError, HexResult},
    hex::{
        AxialCoordinates, CubeCoordinates, Direction, FloatAxial,
        OffsetCoordinates, Parity,
    },
    util::vec2d::Vec2D,
};
use anyhow::Context;
use log::{trace, warn};
use validator::Validate;

pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const ONE_THIRD: f64 = 1.0 / 3.0;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// The two halves of a slice, split along its diagonal
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Triangle {
    Top = 0,
    Bottom = 1,
}

impl Triangle {
    fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Direction for every (horizontal slice, vertical slice, triangle) inside a
/// hex's bounding box. `None` entries are the corners of the box, which are
/// outside the hexagon.
const SLICE_DIRECTIONS: [[[Option<Direction>; 2]; 4]; 2] = {
    use Direction::*;
    [
        // Left half
        [
            [None, Some(NW)],
            [Some(NW), Some(W)],
            [Some(W), Some(SW)],
            [Some(SW), None],
        ],
        // Right half
        [
            [None, Some(NE)],
            [Some(NE), Some(E)],
            [Some(E), Some(SE)],
            [Some(SE), None],
        ],
    ]
};

/// Geometry of a hex grid on the plane. All the plane math is a function of
/// the hex radius, so that's all this holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGrid {
    hex_radius: f64,
    slice: Vec2D,
}

impl HexGrid {
    /// Create a grid for hexes of the given radius (center to vertex). The
    /// radius must be positive and finite; use [Self::from_config] to have
    /// that checked.
    pub fn new(hex_radius: f64) -> Self {
        Self {
            hex_radius,
            slice: Vec2D::new(0.5 * SQRT_3 * hex_radius, 0.5 * hex_radius),
        }
    }

    /// Create a grid from a config. Fails if the config doesn't pass
    /// validation, or if the radius is degenerate.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        if !(config.hex_radius > 0.0) {
            return Err(HexError::invalid_argument(
                "hex_radius",
                format!("must be positive, got {}", config.hex_radius),
            ))
            .context("invalid grid config");
        }
        Ok(Self::new(config.hex_radius))
    }

    pub fn hex_radius(&self) -> f64 {
        self.hex_radius
    }

    /// Size of one classification slice: half the width and a quarter the
    /// height of a hex
    pub fn slice(&self) -> Vec2D {
        self.slice
    }

    /// Get the center of a hex on the plane
    pub fn axial_to_point(&self, axial: AxialCoordinates) -> Vec2D {
        let q = f64::from(axial.q);
        let r = f64::from(axial.r);
        Vec2D::new(
            self.hex_radius * SQRT_3 * (q + r / 2.0),
            self.hex_radius * 1.5 * r,
        )
    }

    /// Get the center of a hex on the plane, from its column and row
    pub fn offset_to_point(&self, offset: OffsetCoordinates) -> Vec2D {
        let shift = match offset.row_parity() {
            Parity::Even => 0.0,
            Parity::Odd => 0.5,
        };
        Vec2D::new(
            self.hex_radius * SQRT_3 * (f64::from(offset.x) + shift),
            self.hex_radius * 1.5 * f64::from(offset.y),
        )
    }

    /// Get the hex that contains a point on the plane. The point must be
    /// within about `2^31` hex radii of the origin, so the cell fits in `i32`
    /// (see [FloatCubic::round](crate::FloatCubic::round)).
    pub fn point_to_cubic(&self, point: Vec2D) -> CubeCoordinates {
        // Order of operations matters for which way near-boundary points fall
        let q = (point.x * ONE_THIRD * SQRT_3 - point.y * ONE_THIRD)
            / self.hex_radius;
        let r = (point.y * TWO_THIRDS) / self.hex_radius;
        FloatAxial::new(q, r).to_float_cubic().round()
    }

    /// Figure out which side of its hex a point is closest to. The hex is
    /// split into six triangles that meet at the center, one per side, and
    /// this returns the direction of the side whose triangle contains the
    /// point.
    ///
    /// Points on the border of a hex (its edges and vertices) get the
    /// direction of a side that touches that spot. Should never fail. An
    /// error means the hex lookup and the slice math disagreed about where
    /// the point is.
    pub fn point_to_direction_in_hex(
        &self,
        point: Vec2D,
    ) -> HexResult<Direction> {
        let axial = self.point_to_cubic(point).to_axial();
        let center = self.axial_to_point(axial);
        let top_left = center
            - Vec2D::new(0.5 * SQRT_3 * self.hex_radius, self.hex_radius);
        let from_top_left = point - top_left;

        // Points on the right or bottom edge of the box (or just outside it,
        // from float error) belong to the last slice
        let h_slice =
            ((from_top_left.x / self.slice.x).floor() as i32).clamp(0, 1);
        let v_slice =
            ((from_top_left.y / self.slice.y).floor() as i32).clamp(0, 3);
        let within_slice = Vec2D::new(
            (from_top_left.x - f64::from(h_slice) * self.slice.x)
                .max(0.0)
                .min(self.slice.x),
            (from_top_left.y - f64::from(v_slice) * self.slice.y)
                .max(0.0)
                .min(self.slice.y),
        );
        // Slices alternate like a checkerboard
        let parity = if (h_slice & 1) + (v_slice & 1) == 1 {
            Parity::Odd
        } else {
            Parity::Even
        };
        let mut triangle = self.which_triangle(within_slice, parity);
        // A corner triangle only touches the hexagon along the slice
        // diagonal, so a point that lands in one is on the border and belongs
        // to the other half
        if slice_lookup(h_slice, v_slice, triangle).is_none() {
            triangle = triangle.opposite();
        }
        trace!(
            "{} is in {} at slice ({}, {}), {:?} triangle",
            point,
            axial,
            h_slice,
            v_slice,
            triangle
        );

        slice_direction(h_slice, v_slice, triangle)
    }

    /// Split a slice along its diagonal and see which half a point (relative
    /// to the slice's top-left) is in. Even slices run their diagonal from
    /// bottom-left to top-right, odd slices from top-left to bottom-right.
    fn which_triangle(&self, within_slice: Vec2D, parity: Parity) -> Triangle {
        let x_fraction = within_slice.x / self.slice.x;
        // y grows downward, so the rising diagonal has the falling formula
        let y_border = match parity {
            Parity::Even => self.slice.y * (1.0 - x_fraction),
            Parity::Odd => self.slice.y * x_fraction,
        };
        if within_slice.y < y_border {
            Triangle::Top
        } else {
            Triangle::Bottom
        }
    }

    /// Build a row-major list of default tiles. See [TileGrid::new].
    pub fn initialize_grid<T: Default>(
        rows: usize,
        columns: usize,
    ) -> Vec<HexTile<T>> {
        TileGrid::new(rows, columns, |_| T::default()).into_tiles()
    }
}

/// Look up the direction for a triangle, or `None` if it's outside the hull
fn slice_lookup(
    h_slice: i32,
    v_slice: i32,
    triangle: Triangle,
) -> Option<Direction> {
    usize::try_from(h_slice)
        .ok()
        .zip(usize::try_from(v_slice).ok())
        .and_then(|(h, v)| SLICE_DIRECTIONS.get(h)?.get(v))
        .and_then(|triangles| triangles[triangle as usize])
}

fn slice_direction(
    h_slice: i32,
    v_slice: i32,
    triangle: Triangle,
) -> HexResult<Direction> {
    slice_lookup(h_slice, v_slice, triangle).ok_or_else(|| {
        let detail = format!(
            "slice ({}, {}) {:?} triangle is outside the hexagon",
            h_slice, v_slice, triangle
        );
        warn!("Point classification failed: {}", detail);
        HexError::InvariantViolation(detail)
    })
}
