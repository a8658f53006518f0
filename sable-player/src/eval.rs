//! Static evaluation of a position.

use crate::positional::PositionalTable;
use sable_othello::{Game, Player};

/// Weight of one piece of material, relative to one point of positional weight.
pub const MATERIAL_WEIGHT: i32 = 10;

/// Score `game` from `root`'s fixed perspective, whoever is to move:
/// `(mine - theirs) * MATERIAL_WEIGHT` plus the positional weight of `root`'s
/// pieces minus that of the opponent's. Empty squares contribute nothing.
///
/// `table` must be built for the board's edge length.
pub fn evaluate(game: &Game, root: Player, table: &PositionalTable) -> i32 {
    debug_assert_eq!(table.edge_length(), game.edge_length());

    let (black, white) = game.token_counts();
    let (mine, theirs) = match root {
        Player::Black => (black as i32, white as i32),
        Player::White => (white as i32, black as i32),
    };

    let board = game.board();
    let positional: i32 = board
        .squares()
        .map(|square| match board.get(square) {
            Some(owner) if owner == root => table.weight(square),
            Some(_) => -table.weight(square),
            None => 0,
        })
        .sum();

    (mine - theirs) * MATERIAL_WEIGHT + positional
}
