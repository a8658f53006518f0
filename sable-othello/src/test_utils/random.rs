use crate::board::BoardError;
use crate::game::{Game, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal actions from the starting position,
/// passing when forced. Stops early if the game finishes.
pub fn random_game<R: Rng + ?Sized>(
    rng: &mut R,
    edge_length: usize,
    plies: usize,
) -> Result<Game, BoardError> {
    let mut game = Game::starting(edge_length)?;

    for _ in 0..plies {
        if game.is_finished() {
            break;
        }

        let mv = match game.legal_moves().choose(rng) {
            Some(&square) => Move::Piece(square),
            None => Move::Pass,
        };

        game = match game.apply_move(mv) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    Ok(game)
}
