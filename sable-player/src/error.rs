use crate::positional::TableError;
use derive_more::{Display, Error};
use sable_othello::IllegalMoveError;

/// Reasons a player cannot produce a move.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum SearchError {
    /// The player to move has no placement. Callers decide whether that means a pass.
    #[display(fmt = "no legal move for the player to move")]
    NoLegalMoves,
    #[display(fmt = "the game is already finished")]
    GameFinished,
    #[display(
        fmt = "positional table is for a {}x{} board, but the board is {}x{}",
        table,
        table,
        board,
        board
    )]
    TableMismatch { table: usize, board: usize },
    #[display(fmt = "{}", source)]
    Table { source: TableError },
    #[display(fmt = "{}", source)]
    Rules { source: IllegalMoveError },
}

impl From<TableError> for SearchError {
    fn from(source: TableError) -> Self {
        SearchError::Table { source }
    }
}

impl From<IllegalMoveError> for SearchError {
    fn from(source: IllegalMoveError) -> Self {
        SearchError::Rules { source }
    }
}
