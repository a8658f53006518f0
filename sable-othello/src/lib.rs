//! `sable-othello` implements the rules of Othello on square boards.
//!
//! The crate is organised in two levels of abstraction:
//!
//!  - [`Board`] holds the raw grid and implements placement with capture-flipping.
//!    It knows nothing about turns or passing.
//!  - [`Game`] wraps a [`Board`] with the player to move and implements the full
//!    game logic: legality checks, passing, and terminal detection.
//!
//! Boards are `n`×`n` for any even `n` from [`MIN_EDGE_LENGTH`] to [`MAX_EDGE_LENGTH`].
//! All coordinates are (row, column), with row 0 at the top and column 0 at the left.

pub mod test_utils;

mod board;
mod game;
mod player;
mod square;
mod utils;

pub use board::*;
pub use game::*;
pub use player::*;
pub use square::*;

/// The smallest supported edge length.
pub const MIN_EDGE_LENGTH: usize = 4;

/// The largest supported edge length.
pub const MAX_EDGE_LENGTH: usize = 16;

/// The number of spaces on the largest supported board.
pub const MAX_SPACES: usize = MAX_EDGE_LENGTH * MAX_EDGE_LENGTH;

/// The edge length of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;
