//! Players that can be asked for a move: the minimax engine and a random baseline.

use crate::engine::{SearchConfig, SearchEngine};
use crate::error::SearchError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sable_othello::{Game, Move, Square};

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    /// A reproducible mover.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn decide_move(&mut self, game: &Game) -> Result<Square, SearchError> {
        game.legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalMoves)
    }
}

/// Every kind of player.
#[derive(Clone, Debug)]
pub enum Agent {
    Minimax(SearchEngine),
    Random(RandomMover),
}

impl Agent {
    pub fn minimax(depth_limit: u32) -> Self {
        Agent::Minimax(SearchEngine::new(
            SearchConfig::default().with_depth_limit(depth_limit),
        ))
    }

    pub fn random(seed: u64) -> Self {
        Agent::Random(RandomMover::seeded(seed))
    }

    /// Pick a placement for the player to move.
    /// Fails with [`SearchError::NoLegalMoves`] when the player must pass.
    pub fn decide_move(&mut self, game: &Game) -> Result<Square, SearchError> {
        match self {
            Agent::Minimax(engine) => engine.decide_move(game),
            Agent::Random(mover) => mover.decide_move(game),
        }
    }

    /// Pick the next action under the rules of the game: pass when there is no
    /// placement, otherwise defer to [`Agent::decide_move`].
    pub fn decide_action(&mut self, game: &Game) -> Result<Move, SearchError> {
        if game.is_finished() {
            return Err(SearchError::GameFinished);
        }

        if game.legal_moves().is_empty() {
            return Ok(Move::Pass);
        }

        self.decide_move(game).map(Move::Piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_othello::{Board, Player};

    #[test]
    fn random_mover_plays_legal_moves() {
        let mut agent = Agent::random(11);
        let game = Game::default();
        for _ in 0..20 {
            let square = agent.decide_move(&game).unwrap();
            assert!(game.legal_moves().contains(&square));
        }
    }

    #[test]
    fn seeded_movers_agree() {
        let game = Game::default();
        let mut first = RandomMover::seeded(5);
        let mut second = RandomMover::seeded(5);
        for _ in 0..10 {
            assert_eq!(first.decide_move(&game), second.decide_move(&game));
        }
    }

    #[test]
    fn actions_follow_the_rules() {
        let board: Board = "
            X O O -
            - - - -
            - - - -
            - - - -
        "
        .parse()
        .unwrap();

        let mut agents = [Agent::minimax(2), Agent::random(3)];
        for agent in agents.iter_mut() {
            let white = Game::new(board.clone(), Player::White);
            assert_eq!(agent.decide_move(&white), Err(SearchError::NoLegalMoves));
            assert_eq!(agent.decide_action(&white), Ok(Move::Pass));

            let black = Game::new(board.clone(), Player::Black);
            assert_eq!(
                agent.decide_action(&black),
                Ok(Move::Piece(Square::new(0, 3)))
            );

            let finished = black.place(Square::new(0, 3)).unwrap();
            assert_eq!(
                agent.decide_action(&finished),
                Err(SearchError::GameFinished)
            );
        }
    }
}
