//! Grid algorithms in cube space. Everything here is a pure function of its
//! inputs. Batch operations that take a `range` validate it up front and
//! return [HexError::InvalidArgument] rather than clamping.

use crate::{
    error::{HexError, HexResult},
    hex::{
        CubeCoordinates, Diagonal, Direction, FloatCubic, HexDirection,
        Rotation,
    },
    util::area_len,
};
use std::cmp;

impl CubeCoordinates {
    /// The delta between a cell and its neighbor in the given direction
    pub fn direction_offset(direction: Direction) -> Self {
        direction.offset()
    }

    /// The delta between a cell and its diagonal in the given direction
    pub fn diagonal_offset(diagonal: Diagonal) -> Self {
        diagonal.offset()
    }

    /// Get the adjacent cell in the given direction
    pub fn neighbor(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Get all six adjacent cells, in clockwise order starting east
    pub fn neighbors(self) -> [Self; 6] {
        let mut neighbors = [self; 6];
        for (neighbor, &dir) in neighbors.iter_mut().zip(Direction::CLOCKWISE) {
            *neighbor += dir.offset();
        }
        neighbors
    }

    /// Get the cell one diagonal step away, across the vertex in the given
    /// direction. This is always 2 steps away.
    pub fn diagonal(self, diagonal: Diagonal) -> Self {
        self + diagonal.offset()
    }

    /// Get all six diagonal cells, in clockwise order starting east-south-east
    pub fn diagonals(self) -> [Self; 6] {
        let mut diagonals = [self; 6];
        for (diagonal, &diag) in diagonals.iter_mut().zip(Diagonal::CLOCKWISE)
        {
            *diagonal += diag.offset();
        }
        diagonals
    }

    /// Number of single steps needed to walk from `a` to `b`
    pub fn distance(a: Self, b: Self) -> usize {
        let diff = a - b;
        cmp::max(
            diff.q().unsigned_abs(),
            cmp::max(diff.r().unsigned_abs(), diff.s().unsigned_abs()),
        ) as usize
    }

    /// Get every cell along the straight line from `start` to `end`, including
    /// both endpoints. Each cell is one step from the last, so the output
    /// always has `distance + 1` elements.
    pub fn line(start: Self, end: Self) -> Vec<Self> {
        let distance = Self::distance(start, end);
        if distance == 0 {
            return vec![start];
        }

        let n = distance as f64;
        (0..=distance)
            .map(|i| {
                let i = i as f64;
                FloatCubic::new(
                    lerp(start.q(), end.q(), n, i),
                    lerp(start.r(), end.r(), n, i),
                    lerp(start.s(), end.s(), n, i),
                )
                .round()
            })
            .collect()
    }

    /// Get the ring of cells exactly `range` steps from `center`. The first
    /// cell is `range` steps from the center in the `start` direction, and
    /// the rest follow clockwise. The output has `6 * range` elements.
    ///
    /// Unlike [Self::area], a range of 0 isn't allowed here.
    pub fn ring(
        center: Self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        if range <= 0 {
            return Err(HexError::invalid_argument(
                "range",
                format!("ring range must be positive, got {}", range),
            ));
        }

        let mut ring = Vec::with_capacity(6 * range as usize);
        let mut cube = center + start.offset() * range;
        // From the start cell, the first side runs two directions clockwise
        // of `start`. Each side after that turns one more step clockwise.
        for side in 0..6 {
            let direction = start.rotate_clockwise(side + 2);
            for _ in 0..range {
                ring.push(cube);
                cube = cube.neighbor(direction);
            }
        }
        Ok(ring)
    }

    /// Get every cell within `range` steps of `center`, starting with the
    /// center and then each ring outward (see [Self::ring]). A range of 0 just
    /// gives the center.
    pub fn spiral_outward(
        center: Self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        let len = spiral_len(range)?;
        let mut spiral = Vec::with_capacity(len);
        spiral.push(center);
        for radius in 1..=range {
            spiral.extend(Self::ring(center, radius, start)?);
        }
        Ok(spiral)
    }

    /// Same as [Self::spiral_outward], but with the rings outermost first and
    /// the center last. Each ring is still walked clockwise.
    pub fn spiral_inward(
        center: Self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        let len = spiral_len(range)?;
        let mut spiral = Vec::with_capacity(len);
        for radius in (1..=range).rev() {
            spiral.extend(Self::ring(center, radius, start)?);
        }
        spiral.push(center);
        Ok(spiral)
    }

    /// Get every cell within `range` steps of `center`, including the center.
    /// Same cells as a spiral, but in no particular order.
    pub fn area(center: Self, range: i32) -> HexResult<Vec<Self>> {
        if range < 0 {
            return Err(HexError::invalid_argument(
                "range",
                format!("area range must be non-negative, got {}", range),
            ));
        }

        let mut area = Vec::with_capacity(area_len(range as usize));
        for dq in -range..=range {
            let dr_min = cmp::max(-range, -dq - range);
            let dr_max = cmp::min(range, -dq + range);
            for dr in dr_min..=dr_max {
                area.push(center + Self::new_qr(dq, dr));
            }
        }
        Ok(area)
    }

    /// Scale this coordinate's offset from the origin by some factor, then
    /// snap the result back onto the grid
    pub fn scale(self, factor: f64) -> Self {
        FloatCubic::from(self).scale(factor).round()
    }

    /// Rotate a cell around a center. Not supported yet, always returns
    /// [HexError::Unimplemented].
    pub fn rotate(
        _center: Self,
        _to_rotate: Self,
        _rotation: Rotation,
    ) -> HexResult<Self> {
        Err(HexError::Unimplemented("coordinate rotation"))
    }

    /// Get the cells that are in both ranges. Not supported yet, always
    /// returns [HexError::Unimplemented].
    pub fn intersect_ranges(_a: &[Self], _b: &[Self]) -> HexResult<Vec<Self>> {
        Err(HexError::Unimplemented("range intersection"))
    }

    pub fn distance_to(self, other: Self) -> usize {
        Self::distance(self, other)
    }

    pub fn line_to(self, end: Self) -> Vec<Self> {
        Self::line(self, end)
    }

    pub fn ring_around(
        self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        Self::ring(self, range, start)
    }

    pub fn spiral_around_outward(
        self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        Self::spiral_outward(self, range, start)
    }

    pub fn spiral_around_inward(
        self,
        range: i32,
        start: Direction,
    ) -> HexResult<Vec<Self>> {
        Self::spiral_inward(self, range, start)
    }

    pub fn area_around(self, range: i32) -> HexResult<Vec<Self>> {
        Self::area(self, range)
    }

    /// Rotate `self` around `center`. See [Self::rotate].
    pub fn rotate_around(
        self,
        center: Self,
        rotation: Rotation,
    ) -> HexResult<Self> {
        Self::rotate(center, self, rotation)
    }
}

/// Interpolate component `i` of `n` steps between two integer components
fn lerp(a: i32, b: i32, n: f64, i: f64) -> f64 {
    f64::from(a) + f64::from(b - a) / n * i
}

fn spiral_len(range: i32) -> HexResult<usize> {
    if range < 0 {
        return Err(HexError::invalid_argument(
            "range",
            format!("spiral range must be non-negative, got {}", range),
        ));
    }
    Ok(area_len(range as usize))
}
