//! Implements game-level Othello logic.
//!
//! [`Game`] is the safe interface: moves are checked for legality, passes are
//! only accepted when there is nothing else to play, and every move returns a
//! fresh state.

use crate::board::{Board, BoardError};
use crate::player::Player;
use crate::square::{ParseSquareError, Square};
use crate::DEFAULT_EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt;

/// An action in an Othello game: pass or place a piece.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    Piece(Square),
    Pass,
}

impl From<Square> for Move {
    fn from(square: Square) -> Self {
        Self::Piece(square)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("PASS"),
            Move::Piece(square) => fmt::Display::fmt(square, f),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

impl From<ParseSquareError> for ParseMoveError {
    fn from(_: ParseSquareError) -> Self {
        ParseMoveError
    }
}

/// Parse a move from square notation ("C4") or "pass".
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }

        Ok(Move::Piece(s.parse()?))
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
#[display(fmt = "illegal move {} for {}", mv, player)]
pub struct IllegalMoveError {
    pub mv: Move,
    pub player: Player,
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
    pub just_passed: bool,
}

impl Default for Game {
    /// The standard 8×8 starting position with Black to move.
    fn default() -> Self {
        Self {
            board: Board::starting(DEFAULT_EDGE_LENGTH)
                .expect("the default edge length is always supported"),
            active_player: Player::default(),
            just_passed: false,
        }
    }
}

impl Game {
    /// Build a game from an arbitrary board with `active_player` to move.
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
            just_passed: false,
        }
    }

    /// The starting position on an `edge_length`×`edge_length` board, Black to move.
    pub fn starting(edge_length: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Board::starting(edge_length)?, Player::default()))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.board.edge_length()
    }

    /// Get the legal placements for the active player, in row-major order.
    /// Empty when the active player must pass.
    #[inline]
    pub fn legal_moves(&self) -> Vec<Square> {
        self.board.moves(self.active_player)
    }

    /// Returns whether `mv` is legal for the active player.
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Piece(square) => self.board.is_legal(square, self.active_player),
            Move::Pass => !self.board.has_moves(self.active_player),
        }
    }

    /// Make a move for the active player, returning the resulting state.
    pub fn apply_move(&self, mv: Move) -> Result<Self, IllegalMoveError> {
        if !self.is_legal(mv) {
            return Err(IllegalMoveError {
                mv,
                player: self.active_player,
            });
        }

        let board = match mv {
            Move::Piece(square) => self.board.place(square, self.active_player),
            Move::Pass => self.board.clone(),
        };

        Ok(Self {
            board,
            active_player: !self.active_player,
            just_passed: mv == Move::Pass,
        })
    }

    /// Place a piece for the active player at `square`.
    #[inline]
    pub fn place(&self, square: Square) -> Result<Self, IllegalMoveError> {
        self.apply_move(Move::Piece(square))
    }

    /// Returns true when neither player can move.
    pub fn is_finished(&self) -> bool {
        !self.board.has_moves(self.active_player) && !self.board.has_moves(!self.active_player)
    }

    /// Count the pieces on the board as (black, white).
    pub fn token_counts(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// Get the winner of a finished game. None for draws and unfinished games.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }

        let (black, white) = self.token_counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active_player)?;
        if self.just_passed {
            f.write_str(" (last move was a pass)")?;
        }
        Ok(())
    }
}
