use crate::{
    error::{HexError, HexResult},
    hex::CubeCoordinates,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum::{EnumIter, EnumString};

/// A class of directions around a hexagon. Each class has exactly six members,
/// listed clockwise starting from east. The ordering is part of the contract:
/// anything that returns one value per direction returns them in this order.
pub trait HexDirection: 'static + Copy + Eq + Sized {
    /// All directions in this class, in clockwise order starting at east (or
    /// whatever first follows east, if east isn't in the class)
    const CLOCKWISE: &'static [Self];

    /// Get the index of this direction within [Self::CLOCKWISE]
    fn index(self) -> usize;

    /// Get the cube delta that moves one step in this direction
    fn offset(self) -> CubeCoordinates;

    /// Get the direction that is `steps` places clockwise from this one
    fn rotate_clockwise(self, steps: usize) -> Self {
        let clockwise = Self::CLOCKWISE;
        clockwise[(self.index() + steps) % clockwise.len()]
    }

    /// Get the direction that is directly opposite this one
    fn opposite(self) -> Self {
        self.rotate_clockwise(Self::CLOCKWISE.len() / 2)
    }
}

/// Look up a direction by its clockwise index, rejecting anything out of
/// range. Used for the `TryFrom<i32>` impls.
fn from_index<D: HexDirection>(name: &'static str, index: i32) -> HexResult<D> {
    usize::try_from(index)
        .ok()
        .and_then(|i| D::CLOCKWISE.get(i))
        .copied()
        .ok_or_else(|| {
            HexError::invalid_argument(
                name,
                format!(
                    "expected an index in 0..{}, got {}",
                    D::CLOCKWISE.len(),
                    index
                ),
            )
        })
}

/// The six directions from a hex center to the midpoint of each of its sides,
/// i.e. the directions of its six neighbors. Pointy-topped hexes have flat
/// sides on the east and west.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    E = 0,
    SE = 1,
    SW = 2,
    W = 3,
    NW = 4,
    NE = 5,
}

impl Default for Direction {
    fn default() -> Self {
        Self::E
    }
}

impl HexDirection for Direction {
    const CLOCKWISE: &'static [Self] =
        &[Self::E, Self::SE, Self::SW, Self::W, Self::NW, Self::NE];

    fn index(self) -> usize {
        self as usize
    }

    fn offset(self) -> CubeCoordinates {
        match self {
            Self::E => CubeCoordinates::new_qr(1, 0),
            Self::SE => CubeCoordinates::new_qr(0, 1),
            Self::SW => CubeCoordinates::new_qr(-1, 1),
            Self::W => CubeCoordinates::new_qr(-1, 0),
            Self::NW => CubeCoordinates::new_qr(0, -1),
            Self::NE => CubeCoordinates::new_qr(1, -1),
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = HexError;

    fn try_from(index: i32) -> HexResult<Self> {
        from_index("direction", index)
    }
}

/// The six directions from a hex center through each of its vertices. One
/// step in a diagonal direction skips over the shared side of two neighbors,
/// landing on the hex that both of them touch.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Diagonal {
    ESE = 0,
    S = 1,
    WSW = 2,
    WNW = 3,
    N = 4,
    ENE = 5,
}

impl HexDirection for Diagonal {
    const CLOCKWISE: &'static [Self] =
        &[Self::ESE, Self::S, Self::WSW, Self::WNW, Self::N, Self::ENE];

    fn index(self) -> usize {
        self as usize
    }

    fn offset(self) -> CubeCoordinates {
        match self {
            Self::ESE => CubeCoordinates::new_qr(1, 1),
            Self::S => CubeCoordinates::new_qr(-1, 2),
            Self::WSW => CubeCoordinates::new_qr(-2, 1),
            Self::WNW => CubeCoordinates::new_qr(-1, -1),
            Self::N => CubeCoordinates::new_qr(1, -2),
            Self::ENE => CubeCoordinates::new_qr(2, -1),
        }
    }
}

impl TryFrom<i32> for Diagonal {
    type Error = HexError;

    fn try_from(index: i32) -> HexResult<Self> {
        from_index("diagonal", index)
    }
}

/// A rotation by a multiple of 60 degrees, in either direction. Rotating a
/// coordinate isn't supported yet, see
/// [CubeCoordinates::rotate](crate::CubeCoordinates::rotate).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rotation {
    Cw60,
    Cw120,
    Cw180,
    Cw240,
    Cw300,
    Ccw60,
    Ccw120,
    Ccw180,
    Ccw240,
    Ccw300,
}

impl Rotation {
    /// Size of this rotation in degrees. Clockwise is positive.
    pub fn degrees(self) -> i32 {
        match self {
            Self::Cw60 => 60,
            Self::Cw120 => 120,
            Self::Cw180 => 180,
            Self::Cw240 => 240,
            Self::Cw300 => 300,
            Self::Ccw60 => -60,
            Self::Ccw120 => -120,
            Self::Ccw180 => -180,
            Self::Ccw240 => -240,
            Self::Ccw300 => -300,
        }
    }
}
