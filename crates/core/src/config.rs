use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a rectangular tile grid and how it's laid out on
/// the plane. Two grids built from the same config will always be identical.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a hex to any of its vertices, in plane
    /// units. This is also the length of each side. Must be strictly positive
    /// for anything on the plane to work, which is checked when building a
    /// [HexGrid](crate::HexGrid).
    #[validate(range(min = 0.0, max = 1000000.0))]
    pub hex_radius: f64,

    /// Number of rows in the tile grid (offset `y` runs over `0..rows`)
    #[validate(range(min = 1, max = 10000))]
    pub rows: usize,

    /// Number of columns in the tile grid (offset `x` runs over `0..columns`)
    #[validate(range(min = 1, max = 10000))]
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_radius: 1.0,
            rows: 10,
            columns: 10,
        }
    }
}
