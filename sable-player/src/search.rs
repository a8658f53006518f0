//! Internal search functions: depth-limited minimax with alpha-beta pruning.
//!
//! Values are always from the root player's perspective. The root player's
//! turns are maximizing levels and the opponent's are minimizing levels; each
//! ply, including a forced pass, alternates between the two.

use crate::error::SearchError;
use crate::eval::evaluate;
use crate::positional::PositionalTable;
use arrayvec::ArrayVec;
use sable_othello::{Game, Move, Player, Square, MAX_SPACES};
use std::cmp::Reverse;

/// Value that loses to every evaluation.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Value that beats every evaluation.
pub const INFINITY: i32 = i32::MAX;

/// A legal move tagged with its positional weight, for ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub square: Square,
    pub weight: i32,
}

pub type CandidateList = ArrayVec<Candidate, MAX_SPACES>;

/// Counters describing the work done by one search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Positions visited below the root, leaves included.
    pub nodes: u64,
    /// Positions scored by the evaluation function.
    pub leaves: u64,
    /// Levels abandoned early by an alpha or beta cutoff.
    pub cutoffs: u64,
}

/// The state of one search: the root player, the table, and running statistics.
pub struct Search<'a> {
    table: &'a PositionalTable,
    root: Player,
    pub stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(table: &'a PositionalTable, root: Player) -> Self {
        Self {
            table,
            root,
            stats: SearchStats::default(),
        }
    }

    /// Legal moves for the player to move, highest positional weight first.
    /// The sort is stable, so equal weights keep their row-major order.
    pub fn ordered_moves(&self, game: &Game) -> CandidateList {
        let mut candidates: CandidateList = game
            .legal_moves()
            .into_iter()
            .map(|square| Candidate {
                square,
                weight: self.table.weight(square),
            })
            .collect();
        candidates.sort_by_key(|candidate| Reverse(candidate.weight));
        candidates
    }

    /// Value of a position where the root player is to move.
    pub fn max_value(
        &mut self,
        game: &Game,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        self.stats.nodes += 1;
        if depth == 0 || game.is_finished() {
            return Ok(self.leaf(game));
        }

        let candidates = self.ordered_moves(game);
        if candidates.is_empty() {
            // Forced pass: the opponent replies on the next ply.
            let passed = game.apply_move(Move::Pass)?;
            return self.min_value(&passed, depth - 1, alpha, beta);
        }

        let mut value = NEG_INFINITY;
        for candidate in candidates {
            let next = game.place(candidate.square)?;
            value = value.max(self.min_value(&next, depth - 1, alpha, beta)?);

            // Fail high: the opponent already has a better line elsewhere.
            if value >= beta {
                self.stats.cutoffs += 1;
                return Ok(value);
            }

            alpha = alpha.max(value);
        }

        Ok(value)
    }

    /// Value of a position where the opponent is to move.
    pub fn min_value(
        &mut self,
        game: &Game,
        depth: u32,
        alpha: i32,
        mut beta: i32,
    ) -> Result<i32, SearchError> {
        self.stats.nodes += 1;
        if depth == 0 || game.is_finished() {
            return Ok(self.leaf(game));
        }

        let candidates = self.ordered_moves(game);
        if candidates.is_empty() {
            let passed = game.apply_move(Move::Pass)?;
            return self.max_value(&passed, depth - 1, alpha, beta);
        }

        let mut value = INFINITY;
        for candidate in candidates {
            let next = game.place(candidate.square)?;
            value = value.min(self.max_value(&next, depth - 1, alpha, beta)?);

            // Fail low: we already have a better line elsewhere.
            if value <= alpha {
                self.stats.cutoffs += 1;
                return Ok(value);
            }

            beta = beta.min(value);
        }

        Ok(value)
    }

    fn leaf(&mut self, game: &Game) -> i32 {
        self.stats.leaves += 1;
        evaluate(game, self.root, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_othello::Board;

    #[test]
    fn orders_by_weight_then_enumeration() {
        let board: Board = "
            - - - - - -
            - O - - O -
            - X X - X -
            - - - O - -
            - - - X - -
            - - - - - -
        "
        .parse()
        .unwrap();
        let game = Game::new(board, Player::Black);
        let table = PositionalTable::build(6).unwrap();
        let search = Search::new(&table, Player::Black);

        assert_eq!(
            game.legal_moves(),
            vec![
                Square::new(0, 0),
                Square::new(0, 1),
                Square::new(0, 4),
                Square::new(2, 3),
                Square::new(4, 2),
                Square::new(4, 4),
            ]
        );

        // Corner first; ties (D3/E5 and B1/E1) keep row-major order.
        let ordered: Vec<(Square, i32)> = search
            .ordered_moves(&game)
            .into_iter()
            .map(|candidate| (candidate.square, candidate.weight))
            .collect();
        assert_eq!(
            ordered,
            vec![
                (Square::new(0, 0), 10),
                (Square::new(2, 3), 1),
                (Square::new(4, 4), 1),
                (Square::new(4, 2), -3),
                (Square::new(0, 1), -5),
                (Square::new(0, 4), -5),
            ]
        );
    }

    #[test]
    fn depth_zero_is_the_evaluation() {
        let game = Game::default();
        let table = PositionalTable::build(8).unwrap();
        let mut search = Search::new(&table, Player::Black);
        assert_eq!(search.max_value(&game, 0, NEG_INFINITY, INFINITY), Ok(0));
        assert_eq!(search.min_value(&game, 0, NEG_INFINITY, INFINITY), Ok(0));
        assert_eq!(search.stats.leaves, 2);
    }

    #[test]
    fn forced_pass_consumes_a_ply() {
        // White to move has no placement; Black then captures along the top row.
        let board: Board = "
            X O O -
            - - - -
            - - - -
            - - - -
        "
        .parse()
        .unwrap();
        let game = Game::new(board, Player::White);
        let table = PositionalTable::build(4).unwrap();
        let mut search = Search::new(&table, Player::Black);

        // Pass (ply 1), then Black plays D1 (ply 2) and the game is over.
        let value = search.min_value(&game, 2, NEG_INFINITY, INFINITY).unwrap();
        assert_eq!(value, 4 * 10 + 10 + -5 + -5 + 10);
        assert!(value != INFINITY && value != NEG_INFINITY);
    }
}
