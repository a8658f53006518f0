//! The minimax player: picks a move by alpha-beta search over the positional evaluation.

use crate::error::SearchError;
use crate::positional::PositionalTable;
use crate::search::{Search, SearchStats, INFINITY, NEG_INFINITY};
use log::{debug, trace};
use sable_othello::{Game, Square};

/// Tunable parameters of the [`SearchEngine`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies searched below each root move. Zero scores each root move directly.
    pub depth_limit: u32,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH_LIMIT: u32 = 7;

    pub fn with_depth_limit(self, depth_limit: u32) -> Self {
        Self { depth_limit }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: Self::DEFAULT_DEPTH_LIMIT,
        }
    }
}

/// The result of a root search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Square,
    /// Minimax value of `best_move` from the searching player's perspective.
    pub value: i32,
    pub stats: SearchStats,
}

/// Depth-limited minimax search with alpha-beta pruning.
///
/// The engine holds no per-game state, so a single engine may serve any number of
/// games, and searches on separate threads only need their own [`Game`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Choose a move at the configured depth limit.
    pub fn decide_move(&self, game: &Game) -> Result<Square, SearchError> {
        self.choose_move(game, self.config.depth_limit)
    }

    /// Choose the best move for the player to move in `game`, searching
    /// `depth_limit` plies below each candidate.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] if the player to move must pass:
    /// the engine never chooses a pass itself.
    pub fn choose_move(&self, game: &Game, depth_limit: u32) -> Result<Square, SearchError> {
        let table = PositionalTable::build(game.edge_length())?;
        Ok(self.search(game, depth_limit, &table)?.best_move)
    }

    /// Run a root search using a prebuilt `table`, which must match the board size.
    ///
    /// Candidates are visited highest positional weight first. The first candidate
    /// becomes the initial best, and later ones replace it only with a strictly greater
    /// value, so the earliest of several equally good moves wins.
    pub fn search(
        &self,
        game: &Game,
        depth_limit: u32,
        table: &PositionalTable,
    ) -> Result<SearchOutcome, SearchError> {
        if table.edge_length() != game.edge_length() {
            return Err(SearchError::TableMismatch {
                table: table.edge_length(),
                board: game.edge_length(),
            });
        }

        let root = game.active_player;
        let mut search = Search::new(table, root);
        let mut best: Option<(Square, i32)> = None;

        // No sibling cutoff above the root: beta stays open.
        let mut alpha = NEG_INFINITY;

        for candidate in search.ordered_moves(game) {
            let next = game.place(candidate.square)?;
            let value = search.min_value(&next, depth_limit, alpha, INFINITY)?;
            trace!(
                "{} candidate {} (weight {}): {}",
                root,
                candidate.square,
                candidate.weight,
                value
            );

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((candidate.square, value));
                alpha = alpha.max(value);
            }
        }

        let (best_move, value) = best.ok_or(SearchError::NoLegalMoves)?;
        let stats = search.stats;
        debug!(
            "{} plays {} at depth {}: value {}, {} nodes, {} leaves, {} cutoffs",
            root, best_move, depth_limit, value, stats.nodes, stats.leaves, stats.cutoffs
        );

        Ok(SearchOutcome {
            best_move,
            value,
            stats,
        })
    }
}
