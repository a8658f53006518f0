//! Code for working with [`Square`]s on the Othello board.

use crate::utils::COLUMN_LABELS;
use crate::MAX_EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A location on the board as (row, column) coordinates.
/// Row 0 is the top of the board and column 0 is the left.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Get the row and column coordinates.
    #[inline]
    pub const fn to_coords(self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Convert into a row-major square index on a board of the given size.
    #[inline]
    pub const fn index(self, edge_length: usize) -> usize {
        self.row * edge_length + self.col
    }

    /// Convert from a row-major square index on a board of the given size.
    #[inline]
    pub const fn from_index(index: usize, edge_length: usize) -> Self {
        Self::new(index / edge_length, index % edge_length)
    }

    /// Returns whether this square lies on a board of the given size.
    #[inline]
    pub const fn is_within(self, edge_length: usize) -> bool {
        self.row < edge_length && self.col < edge_length
    }

    /// Step by a signed offset, returning None if the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, edge_length: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let square = Self::new(row, col);
        square.is_within(edge_length).then_some(square)
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Convert this [`Square`] into string notation ("A4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LABELS.chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid square string")]
pub struct ParseSquareError;

/// Build a [`Square`] from 1-indexed string notation ("A4", "C12").
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseSquareError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseSquareError)?;
        let row: usize = chars.as_str().parse().or(Err(ParseSquareError))?;

        if row == 0 || row > MAX_EDGE_LENGTH {
            return Err(ParseSquareError);
        }

        Ok(Self::new(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn square_index_round_trip() {
        assert_eq!(Square::new(0, 0).index(8), 0);
        assert_eq!(Square::new(7, 7).index(8), 63);
        assert_eq!(Square::new(2, 3).index(6), 15);
        assert_eq!(Square::from_index(15, 6), Square::new(2, 3));
    }

    #[test]
    fn square_offset() {
        assert_eq!(Square::new(0, 0).offset(-1, 0, 8), None);
        assert_eq!(Square::new(7, 3).offset(1, 0, 8), None);
        assert_eq!(Square::new(3, 3).offset(-1, 1, 8), Some(Square::new(2, 4)));
    }

    #[test]
    fn square_from_str_success() {
        assert_eq!(Square::from_str("A1"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_str("h8"), Ok(Square::new(7, 7)));
        assert_eq!(Square::from_str("D7"), Ok(Square::new(6, 3)));
        assert_eq!(Square::from_str("P16"), Ok(Square::new(15, 15)));
    }

    #[test]
    fn square_from_str_fail() {
        assert_eq!(Square::from_str(""), Err(ParseSquareError));
        assert_eq!(Square::from_str("A0"), Err(ParseSquareError));
        assert_eq!(Square::from_str("AA"), Err(ParseSquareError));
        assert_eq!(Square::from_str("A17"), Err(ParseSquareError));
        assert_eq!(Square::from_str("Q5"), Err(ParseSquareError));
    }

    #[test]
    fn square_to_str() {
        assert_eq!(Square::new(7, 7).to_string(), "H8");
        assert_eq!(Square::new(0, 0).to_string(), "A1");
        assert_eq!(Square::new(11, 2).to_string(), "C12");
        assert_eq!(Square::from_str("F6").unwrap().to_string(), "F6");
    }
}
