//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move generation and flipping.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::{Game, Move};

/// Count leaves below the standard 8×8 starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::default(), depth)
}

/// Count leaves `depth` plies below `game`. A forced pass counts as a ply,
/// and a finished game is a leaf regardless of the remaining depth.
pub fn leaves_below(game: &Game, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if game.just_passed {
            return 1;
        }

        return match game.apply_move(Move::Pass) {
            Ok(passed) => leaves_below(&passed, depth - 1),
            Err(_) => 1,
        };
    }

    all_moves
        .into_iter()
        .filter_map(|square| game.place(square).ok())
        .map(|next| leaves_below(&next, depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
