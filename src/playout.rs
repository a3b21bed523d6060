//! Random playouts (random game simulation).
//!
//! A playout picks uniformly random legal actions until the game ends. It is
//! used as the "random" opponent in the driver and to check that the minimax
//! player never loses against arbitrary play.

use fastrand::Rng;

use crate::board::{Action, Board};
use crate::game::{apply_action, is_terminal, legal_actions};

/// Choose a uniformly random legal action, or `None` on a terminal board.
pub fn random_action(board: &Board, rng: &mut Rng) -> Option<Action> {
    if is_terminal(board) {
        return None;
    }
    let actions = legal_actions(board);
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.usize(..actions.len())])
}

/// Play random actions from `board` until the game is over.
///
/// Returns the final (terminal) board. The input board is left untouched.
pub fn playout(board: &Board, rng: &mut Rng) -> Board {
    let mut current = *board;
    while let Some(action) = random_action(&current, rng) {
        match apply_action(&current, action) {
            Ok(next) => current = next,
            Err(_) => break,
        }
    }
    current
}
