//! Continuous hex coordinates. These only exist as the intermediate step
//! between plane space and a discrete cell: build one, then [FloatCubic::round]
//! it. Neither type upholds the `q + r + s == 0` invariant.

use crate::hex::{AxialCoordinates, CubeCoordinates};
use derive_more::{Add, Display, Mul, Sub};
use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "FloatCubic({}, {}, {})", q, r, s)]
pub struct FloatCubic {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FloatCubic {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Drop `r`, same as [CubeCoordinates::to_axial]
    pub fn to_float_axial(self) -> FloatAxial {
        FloatAxial::new(self.q, self.s)
    }

    /// Multiply each component by the given factor
    pub fn scale(self, factor: f64) -> Self {
        self * factor
    }

    /// Snap to the nearest cell. Each component is rounded independently
    /// (half to even), then whichever component moved the furthest gets
    /// recomputed from the other two, which puts the value back on the plane.
    /// Ties go to `s`, then `r`: `q` is only fixed if it moved strictly the
    /// most, and `r` only if it moved strictly more than `s`.
    ///
    /// Every component must fit in an `i32`. Anything bigger would saturate
    /// into the wrong cell, so debug builds panic on it instead.
    pub fn round(self) -> CubeCoordinates {
        debug_assert!(
            [self.q, self.r, self.s]
                .iter()
                .all(|component| !(component.abs() > f64::from(i32::MAX))),
            "{} is outside the i32 coordinate range",
            self
        );
        let q = self.q.round_ties_even();
        let r = self.r.round_ties_even();
        let s = self.s.round_ties_even();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            CubeCoordinates::new_rs(r as i32, s as i32)
        } else if r_diff > s_diff {
            CubeCoordinates::new_qs(q as i32, s as i32)
        } else {
            CubeCoordinates::new_qr(q as i32, r as i32)
        }
    }
}

impl From<CubeCoordinates> for FloatCubic {
    fn from(cube: CubeCoordinates) -> Self {
        Self::new(cube.q().into(), cube.r().into(), cube.s().into())
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "FloatAxial({}, {})", q, r)]
pub struct FloatAxial {
    pub q: f64,
    pub r: f64,
}

impl FloatAxial {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// Lift back into cube space. Like the integer types, axial `r` is
    /// cube `s`.
    pub fn to_float_cubic(self) -> FloatCubic {
        FloatCubic::new(self.q, -self.q - self.r, self.r)
    }

    pub fn round(self) -> AxialCoordinates {
        self.to_float_cubic().round().to_axial()
    }
}

impl From<AxialCoordinates> for FloatAxial {
    fn from(axial: AxialCoordinates) -> Self {
        Self::new(axial.q.into(), axial.r.into())
    }
}
