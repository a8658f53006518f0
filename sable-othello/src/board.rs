//! Board-level Othello dynamics: piece placement and capture-flipping.
//!
//! A [`Board`] is a row-major grid of cells, each empty or holding one player's piece.
//! Operations here do not track turns and do not check legality; use [`crate::Game`]
//! for that. Every operation that changes the position returns a fresh board.

use crate::player::Player;
use crate::square::Square;
use crate::{utils, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// Offsets to the eight neighbors of a square, as (row, column) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An `n`×`n` grid of cells.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    edge_length: usize,
    cells: Vec<Option<Player>>,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum BoardError {
    #[display(
        fmt = "unsupported edge length {}: must be even and between {} and {}",
        edge_length,
        MIN_EDGE_LENGTH,
        MAX_EDGE_LENGTH
    )]
    InvalidEdgeLength { edge_length: usize },
}

impl Board {
    /// Check that `edge_length` describes a supported board.
    pub fn check_edge_length(edge_length: usize) -> Result<(), BoardError> {
        if (MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length) && edge_length % 2 == 0 {
            Ok(())
        } else {
            Err(BoardError::InvalidEdgeLength { edge_length })
        }
    }

    /// An empty board.
    pub fn empty(edge_length: usize) -> Result<Self, BoardError> {
        Self::check_edge_length(edge_length)?;
        Ok(Self {
            edge_length,
            cells: vec![None; edge_length * edge_length],
        })
    }

    /// The standard starting position: four pieces in the centre,
    /// with White on the main diagonal.
    pub fn starting(edge_length: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(edge_length)?;
        let mid = edge_length / 2;
        board.set(Square::new(mid - 1, mid - 1), Player::White);
        board.set(Square::new(mid, mid), Player::White);
        board.set(Square::new(mid - 1, mid), Player::Black);
        board.set(Square::new(mid, mid - 1), Player::Black);
        Ok(board)
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// Returns whether `square` lies on this board.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.is_within(self.edge_length)
    }

    /// Get the piece at `square`. Squares off the board are reported empty.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Player> {
        if self.contains(square) {
            self.cells[square.index(self.edge_length)]
        } else {
            None
        }
    }

    /// Iterate over every square on the board in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let edge_length = self.edge_length;
        (0..edge_length * edge_length).map(move |index| Square::from_index(index, edge_length))
    }

    /// Count the pieces belonging to `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    /// Count the empty squares.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get the opponent pieces `player` would capture by placing at `square`.
    /// Empty if the square is occupied, off the board, or captures nothing.
    pub fn flips(&self, square: Square, player: Player) -> Vec<Square> {
        let mut flipped = Vec::new();
        if !self.contains(square) || self.get(square).is_some() {
            return flipped;
        }

        for (d_row, d_col) in DIRECTIONS {
            let run_start = flipped.len();
            let mut cursor = square.offset(d_row, d_col, self.edge_length);

            while let Some(next) = cursor {
                match self.get(next) {
                    Some(piece) if piece == !player => {
                        flipped.push(next);
                        cursor = next.offset(d_row, d_col, self.edge_length);
                    }
                    // Bracketed by one of our pieces: keep the run.
                    Some(_) => break,
                    None => {
                        cursor = None;
                    }
                }
            }

            // Ran off the board or into an empty square: nothing captured this way.
            if cursor.is_none() {
                flipped.truncate(run_start);
            }
        }

        flipped
    }

    /// Returns whether `player` has a capturing placement at `square`.
    #[inline]
    pub fn is_legal(&self, square: Square, player: Player) -> bool {
        !self.flips(square, player).is_empty()
    }

    /// Get every capturing placement for `player`, in row-major order.
    pub fn moves(&self, player: Player) -> Vec<Square> {
        self.squares()
            .filter(|&square| self.is_legal(square, player))
            .collect()
    }

    /// Returns whether `player` has any capturing placement.
    pub fn has_moves(&self, player: Player) -> bool {
        self.squares().any(|square| self.is_legal(square, player))
    }

    /// Place a piece for `player` at `square` and flip the captured pieces.
    /// Legality is not checked: a non-capturing placement still places the piece.
    pub fn place(&self, square: Square, player: Player) -> Self {
        let mut next = self.clone();
        for flipped in self.flips(square, player) {
            next.set(flipped, player);
        }
        next.set(square, player);
        next
    }

    #[inline]
    fn set(&mut self, square: Square, player: Player) {
        let index = square.index(self.edge_length);
        self.cells[index] = Some(player);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().map(|cell| match cell {
                None => '.',
                Some(Player::Black) => '#',
                Some(Player::White) => 'O',
            }),
            self.edge_length,
            f,
        )
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// Parse a board from one character per cell in row-major order: `X`, `#` or `B` for Black,
/// `O` or `W` for White, and `-` or `.` for empty. Whitespace is ignored, and the number of
/// cells must describe a supported square board.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' | '#' | 'B' => Ok(Some(Player::Black)),
                'O' | 'W' => Ok(Some(Player::White)),
                '-' | '.' => Ok(None),
                _ => Err(ParseBoardError),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edge_length = (MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH)
            .find(|edge| edge * edge == cells.len())
            .ok_or(ParseBoardError)?;
        Self::check_edge_length(edge_length).or(Err(ParseBoardError))?;

        Ok(Self { edge_length, cells })
    }
}
