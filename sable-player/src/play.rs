//! Playing complete games between two agents.

use crate::agent::Agent;
use crate::error::SearchError;
use itertools::Itertools;
use log::debug;
use sable_othello::{Game, Move, Player};

/// A finished game and the moves that led to it.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub game: Game,
    pub moves: Vec<Move>,
}

impl PlayedGame {
    /// Space-separated move notation, passes included.
    pub fn transcript(&self) -> String {
        self.moves.iter().join(" ")
    }
}

/// Play `game` to the end, asking `black` and `white` for each of their actions.
pub fn play_game(
    black: &mut Agent,
    white: &mut Agent,
    mut game: Game,
) -> Result<PlayedGame, SearchError> {
    let mut moves = Vec::new();

    while !game.is_finished() {
        let agent = match game.active_player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let mv = agent.decide_action(&game)?;
        game = game.apply_move(mv)?;
        moves.push(mv);
    }

    let (black_count, white_count) = game.token_counts();
    debug!(
        "game over after {} moves: {} to {}",
        moves.len(),
        black_count,
        white_count
    );

    Ok(PlayedGame { game, moves })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_games_finish() {
        let mut black = Agent::random(1);
        let mut white = Agent::random(2);
        let played = play_game(&mut black, &mut white, Game::starting(6).unwrap()).unwrap();

        assert!(played.game.is_finished());
        let mut replay = Game::starting(6).unwrap();
        for &mv in &played.moves {
            replay = replay.apply_move(mv).unwrap();
        }
        assert_eq!(replay, played.game);
        assert_eq!(played.transcript().split(' ').count(), played.moves.len());
    }
}
