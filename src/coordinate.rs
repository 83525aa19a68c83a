//! Board coordinates and boundary parsing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A (row, column) pair addressing one cell of the 3x3 board.
///
/// Both components are always in `0..3` - a `Coordinate` that exists is a
/// legal board address, so range checking happens once, at construction,
/// parsing, or deserialization, and never inside the engine. The
/// two-character text form `"rc"` (row digit then column digit, `"00"`
/// through `"22"`) is accepted at the boundary via `FromStr` and produced
/// by `Display`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Unvalidated wire form; range-checked before becoming a `Coordinate`.
#[derive(Deserialize)]
struct RawCoordinate {
    row: u8,
    col: u8,
}

/// A (row, column) pair with a component outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Coordinate ({row}, {col}) is out of range")]
struct OutOfRangeError {
    row: u8,
    col: u8,
}

impl std::error::Error for OutOfRangeError {}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = OutOfRangeError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col).ok_or(OutOfRangeError {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Coordinate {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting components outside `0..3`.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Const constructor for in-range components.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts to a row-major array index (0-8).
    pub(crate) fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// True when the coordinate lies on the (0,0)-(2,2) diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True when the coordinate lies on the (2,0)-(0,2) diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// Error parsing the two-character `"rc"` coordinate form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCoordinateError {
    /// Input was not exactly two characters.
    #[display("Expected two characters, got {_0:?}")]
    Length(String),

    /// A character was not a digit in 0-2.
    #[display("Expected a digit in 0-2, got {_0:?}")]
    Digit(char),
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [row, col] = chars.as_slice() else {
            return Err(ParseCoordinateError::Length(s.to_owned()));
        };
        let digit = |ch: char| {
            ch.to_digit(10)
                .filter(|d| *d < 3)
                .map(|d| d as u8)
                .ok_or(ParseCoordinateError::Digit(ch))
        };
        Ok(Self {
            row: digit(*row)?,
            col: digit(*col)?,
        })
    }
}
