//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The search walks the whole game
//! tree below the given board with no pruning and no caching; the tree below
//! the empty board has fewer than 550k positions, which is small enough to
//! visit every time.
//!
//! Each call returns its own [`Evaluation`]; nothing is shared between
//! recursive calls apart from the board snapshots they are handed.

use crate::board::{Action, Board};
use crate::game::{apply_action, current_player, is_terminal, legal_actions, utility};

/// Result of searching a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Game-theoretic value from X's point of view
    pub value: i32,
    /// Optimal action for the player to move (`None` on terminal boards)
    pub action: Option<Action>,
    /// Number of positions visited, including this one
    pub nodes: u64,
}

/// Search the full game tree below `board`.
///
/// On a non-terminal board every legal action is tried in row-major order.
/// An action replaces the current best only when its value is strictly
/// better for the player to move, so ties keep the earliest action.
pub fn minimax(board: &Board) -> Evaluation {
    if is_terminal(board) {
        return Evaluation {
            value: utility(board),
            action: None,
            nodes: 1,
        };
    }

    let maximizing = current_player(board).is_maximizing();
    let mut best: Option<(i32, Action)> = None;
    let mut nodes = 1;

    for (action, child) in children(board) {
        let eval = minimax(&child);
        nodes += eval.nodes;

        let improves = match best {
            None => true,
            Some((value, _)) if maximizing => eval.value > value,
            Some((value, _)) => eval.value < value,
        };
        if improves {
            best = Some((eval.value, action));
        }
    }

    // A non-terminal board always has at least one child, so `best` is set.
    let (value, action) = match best {
        Some((value, action)) => (value, Some(action)),
        None => (utility(board), None),
    };
    Evaluation {
        value,
        action,
        nodes,
    }
}

/// The optimal action for the player to move, or `None` if the game is over.
pub fn best_action(board: &Board) -> Option<Action> {
    minimax(board).action
}

/// Every legal action with the minimax value of the board it leads to.
pub fn evaluate_actions(board: &Board) -> Vec<(Action, i32)> {
    if is_terminal(board) {
        return Vec::new();
    }
    children(board)
        .map(|(action, child)| (action, minimax(&child).value))
        .collect()
}

/// Print debug information about every candidate action.
pub fn dump_evaluations(board: &Board) {
    let player = current_player(board);
    for (action, value) in evaluate_actions(board) {
        eprintln!("{player} move {action} value={value:+}");
    }
}

/// Legal actions paired with the boards they produce.
fn children(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    legal_actions(board)
        .into_iter()
        .filter_map(move |action| apply_action(board, action).ok().map(|b| (action, b)))
}
