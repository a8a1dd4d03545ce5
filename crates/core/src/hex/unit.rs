//! This sub-module contains the integer coordinate types of the hex grid, and
//! the conversions between them. See the parent module documentation for a
//! description of each coordinate system.

use crate::error::{HexError, HexResult};
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};

/// A cell position in cube space. This is the canonical representation: all
/// of the grid algorithms (neighbors, distance, rings, lines...) operate on
/// this type, and the other coordinate types convert through it.
///
/// **For every value of this type, `q + r + s == 0`.** The fields are private
/// so the invariant can't be broken from outside; every constructor either
/// derives one component from the other two or validates its input.
///
/// See this page for info on how the cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "CubeCoordinates({}, {}, {})", q, r, s)]
#[serde(try_from = "KeyOr<CubeFields>")]
pub struct CubeCoordinates {
    q: i32,
    r: i32,
    s: i32,
}

impl CubeCoordinates {
    pub const ORIGIN: Self = Self::new_qr(0, 0);
    /// Number of bytes in the output of [Self::to_bytes]
    pub const BYTE_SIZE: usize = 12;

    /// Construct a new cube coordinate from all three components. Returns an
    /// error if the components don't sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> HexResult<Self> {
        // Widen so out-of-range input can't overflow into a false zero
        if i64::from(q) + i64::from(r) + i64::from(s) == 0 {
            Ok(Self { q, r, s })
        } else {
            Err(HexError::invalid_argument(
                "cube",
                format!("({}, {}, {}) is not on the plane q+r+s=0", q, r, s),
            ))
        }
    }

    /// Construct a new cube coordinate with the given q and r. Since q+r+s=0
    /// for all cells, we can derive s from q & r.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Construct a new cube coordinate with the given q and s. Since q+r+s=0
    /// for all cells, we can derive r from q & s.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self { q, r: -q - s, s }
    }

    /// Construct a new cube coordinate with the given r and s. Since q+r+s=0
    /// for all cells, we can derive q from r & s.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self { q: -r - s, r, s }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        self.s
    }

    /// Convert to axial coordinates. The axial `r` is the cube `s`, **not**
    /// the cube `r`. The cube `r` is the one that gets dropped.
    pub fn to_axial(self) -> AxialCoordinates {
        AxialCoordinates::new(self.q, self.s)
    }

    /// Convert to odd-row offset coordinates. The row is the cube `r`.
    pub fn to_offset(self) -> OffsetCoordinates {
        // r - (r & 1) is always even, so the division is exact
        let x = self.q + (self.r - (self.r & 1)) / 2;
        OffsetCoordinates::new(x, self.r)
    }

    /// The compact key form of this value, `"q,r,s"`. This is what the value
    /// deserializes from when used as a string map key.
    pub fn to_key(self) -> String {
        format!("{},{},{}", self.q, self.r, self.s)
    }

    /// Encode as little-endian 32-bit integers, in `q, r, s` order
    pub fn to_bytes(self) -> [u8; Self::BYTE_SIZE] {
        write_components([self.q, self.r, self.s])
    }

    /// Decode the output of [Self::to_bytes]. Any bytes beyond
    /// [Self::BYTE_SIZE] are ignored.
    pub fn from_bytes(bytes: &[u8]) -> HexResult<Self> {
        let [q, r, s] = read_components("CubeCoordinates", bytes)?;
        Self::new(q, r, s)
    }
}

impl From<AxialCoordinates> for CubeCoordinates {
    fn from(axial: AxialCoordinates) -> Self {
        axial.to_cubic()
    }
}

impl From<OffsetCoordinates> for CubeCoordinates {
    fn from(offset: OffsetCoordinates) -> Self {
        offset.to_cubic()
    }
}

impl FromStr for CubeCoordinates {
    type Err = HexError;

    fn from_str(key: &str) -> HexResult<Self> {
        let [q, r, s] = parse_key("CubeCoordinates", key)?;
        Self::new(q, r, s)
    }
}

/// A cell position in axial space. This holds exactly the same information as
/// [CubeCoordinates] minus the redundant component, which makes it a little
/// more compact for storage and keys.
///
/// Following the redblobgames convention, `q` is the cube `q` and `r` is the
/// cube **`s`**.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "AxialCoordinates({}, {})", q, r)]
#[serde(try_from = "KeyOr<AxialFields>")]
pub struct AxialCoordinates {
    pub q: i32,
    pub r: i32,
}

impl AxialCoordinates {
    pub const BYTE_SIZE: usize = 8;

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn to_cubic(self) -> CubeCoordinates {
        CubeCoordinates::new_qs(self.q, self.r)
    }

    pub fn to_key(self) -> String {
        format!("{},{}", self.q, self.r)
    }

    pub fn to_bytes(self) -> [u8; Self::BYTE_SIZE] {
        write_components([self.q, self.r])
    }

    pub fn from_bytes(bytes: &[u8]) -> HexResult<Self> {
        let [q, r] = read_components("AxialCoordinates", bytes)?;
        Ok(Self::new(q, r))
    }
}

impl From<CubeCoordinates> for AxialCoordinates {
    fn from(cube: CubeCoordinates) -> Self {
        cube.to_axial()
    }
}

impl FromStr for AxialCoordinates {
    type Err = HexError;

    fn from_str(key: &str) -> HexResult<Self> {
        let [q, r] = parse_key("AxialCoordinates", key)?;
        Ok(Self::new(q, r))
    }
}

/// Parity of a row index (or anything else, really)
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

/// A cell position as a column (`x`) and row (`y`) in a rectangular array,
/// using the **odd-row** layout for pointy-topped hexes: every odd row is
/// shoved right by half a cell. This maps directly onto dense row-major
/// storage, but it's the most expensive type to convert to and from cube
/// space, so don't do math in it.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "OffsetCoordinates({}, {})", x, y)]
#[serde(try_from = "KeyOr<OffsetFields>")]
pub struct OffsetCoordinates {
    pub x: i32,
    pub y: i32,
}

impl OffsetCoordinates {
    pub const BYTE_SIZE: usize = 8;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn row_parity(self) -> Parity {
        // Two's complement, so this is 1 for negative odd rows too
        if self.y & 1 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn is_odd_row(self) -> bool {
        self.row_parity() == Parity::Odd
    }

    pub fn to_cubic(self) -> CubeCoordinates {
        // y - parity is always even, so truncating and flooring division
        // agree here, even for negative rows
        let q = self.x - (self.y - self.row_parity() as i32) / 2;
        CubeCoordinates::new_qr(q, self.y)
    }

    pub fn to_key(self) -> String {
        format!("{},{}", self.x, self.y)
    }

    pub fn to_bytes(self) -> [u8; Self::BYTE_SIZE] {
        write_components([self.x, self.y])
    }

    pub fn from_bytes(bytes: &[u8]) -> HexResult<Self> {
        let [x, y] = read_components("OffsetCoordinates", bytes)?;
        Ok(Self::new(x, y))
    }
}

impl From<CubeCoordinates> for OffsetCoordinates {
    fn from(cube: CubeCoordinates) -> Self {
        cube.to_offset()
    }
}

impl FromStr for OffsetCoordinates {
    type Err = HexError;

    fn from_str(key: &str) -> HexResult<Self> {
        let [x, y] = parse_key("OffsetCoordinates", key)?;
        Ok(Self::new(x, y))
    }
}

/// Serialized form of a coordinate. Coordinates always serialize as a struct,
/// but we accept either the struct or the compact key string, so that values
/// written out as map keys can be read back in.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyOr<F> {
    Key(String),
    Fields(F),
}

#[derive(Deserialize)]
struct CubeFields {
    q: i32,
    r: i32,
    s: i32,
}

#[derive(Deserialize)]
struct AxialFields {
    q: i32,
    r: i32,
}

#[derive(Deserialize)]
struct OffsetFields {
    x: i32,
    y: i32,
}

impl TryFrom<KeyOr<CubeFields>> for CubeCoordinates {
    type Error = HexError;

    fn try_from(value: KeyOr<CubeFields>) -> HexResult<Self> {
        match value {
            KeyOr::Key(key) => key.parse(),
            KeyOr::Fields(CubeFields { q, r, s }) => Self::new(q, r, s),
        }
    }
}

impl TryFrom<KeyOr<AxialFields>> for AxialCoordinates {
    type Error = HexError;

    fn try_from(value: KeyOr<AxialFields>) -> HexResult<Self> {
        match value {
            KeyOr::Key(key) => key.parse(),
            KeyOr::Fields(AxialFields { q, r }) => Ok(Self::new(q, r)),
        }
    }
}

impl TryFrom<KeyOr<OffsetFields>> for OffsetCoordinates {
    type Error = HexError;

    fn try_from(value: KeyOr<OffsetFields>) -> HexResult<Self> {
        match value {
            KeyOr::Key(key) => key.parse(),
            KeyOr::Fields(OffsetFields { x, y }) => Ok(Self::new(x, y)),
        }
    }
}

/// Parse a comma-separated list of exactly `N` integers
fn parse_key<const N: usize>(
    type_name: &'static str,
    key: &str,
) -> HexResult<[i32; N]> {
    let invalid = || {
        HexError::invalid_argument(
            "key",
            format!("{:?} is not a valid {} key", key, type_name),
        )
    };

    let mut components = [0; N];
    let mut parts = key.split(',');
    for component in components.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        *component = part.trim().parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(components)
}

fn write_components<const N: usize, const BYTES: usize>(
    components: [i32; N],
) -> [u8; BYTES] {
    debug_assert_eq!(N * 4, BYTES, "expected 4 bytes per component");
    let mut bytes = [0; BYTES];
    for (chunk, component) in bytes.chunks_exact_mut(4).zip(components) {
        chunk.copy_from_slice(&component.to_le_bytes());
    }
    bytes
}

fn read_components<const N: usize>(
    type_name: &'static str,
    bytes: &[u8],
) -> HexResult<[i32; N]> {
    if bytes.len() < N * 4 {
        return Err(HexError::invalid_argument(
            "bytes",
            format!(
                "{} needs {} bytes, got {}",
                type_name,
                N * 4,
                bytes.len()
            ),
        ));
    }

    let mut components = [0; N];
    for (component, chunk) in components.iter_mut().zip(bytes.chunks_exact(4))
    {
        *component =
            i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(components)
}
