//! Game rules: turn order, legal moves, move application, and scoring.
//!
//! Every function here takes a board by reference and never modifies it.
//! Turn order is not stored anywhere; it is recomputed from mark counts so
//! that any board (including one parsed from text) knows who moves next.

use crate::board::{Action, Board, Cell, MoveError, Player};
use crate::constants::{UTILITY_DRAW, UTILITY_O_WIN, UTILITY_X_WIN, WIN_LINES};

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(p) => write!(f, "{p} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// The starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// The player whose turn it is.
///
/// X moves whenever it has no more marks than O, so X opens on an empty board.
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// All empty cells, in row-major order.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board.empty_cells().collect()
}

/// The board after the player to move marks `action`.
pub fn apply_action(board: &Board, action: Action) -> Result<Board, MoveError> {
    match board.get(action.row, action.col) {
        None => Err(MoveError::OutOfBounds),
        Some(Cell::Mark(_)) => Err(MoveError::CellOccupied),
        Some(Cell::Empty) => board.with_mark(action, current_player(board)),
    }
}

/// The player holding three in a row, if any.
///
/// Rows are checked first, then columns, then diagonals; on a malformed board
/// with several completed lines the first one found wins.
pub fn winner(board: &Board) -> Option<Player> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|(r, col)| board.get(r, col));
        let owner = a?.owner()?;
        (a == b && a == c).then_some(owner)
    })
}

/// True once somebody has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// +1 if X has won, -1 if O has won, 0 otherwise.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => UTILITY_X_WIN,
        Some(Player::O) => UTILITY_O_WIN,
        None => UTILITY_DRAW,
    }
}

/// Result of a finished game, or `None` while play continues.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(p) = winner(board) {
        Some(GameOutcome::Win(p))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let b = initial_state();
        assert_eq!(b.mark_count(), 0);
        assert_eq!(current_player(&b), Player::X);
        assert_eq!(legal_actions(&b).len(), 9);
        assert_eq!(winner(&b), None);
        assert!(!is_terminal(&b));
        assert_eq!(outcome(&b), None);
    }

    #[test]
    fn test_current_player_counts_marks() {
        let b = board("XOX/.XO/...");
        assert_eq!(current_player(&b), Player::O);
        let b = board("XO./.../...");
        assert_eq!(current_player(&b), Player::X);
    }

    #[test]
    fn test_legal_actions_example() {
        let b = board("XOX/.XO/...");
        assert_eq!(
            legal_actions(&b),
            vec![
                Action::new(1, 0),
                Action::new(2, 0),
                Action::new(2, 1),
                Action::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_legal_actions_full_board() {
        let b = board("XOX/XOO/OXX");
        assert!(legal_actions(&b).is_empty());
    }

    #[test]
    fn test_apply_action_first_move() {
        let b = initial_state();
        let next = apply_action(&b, Action::new(0, 0)).unwrap();
        assert_eq!(next, board("X../.../..."));
        assert_eq!(b, initial_state(), "input board must not change");
    }

    #[test]
    fn test_apply_action_alternates() {
        let b = apply_action(&initial_state(), Action::new(1, 1)).unwrap();
        let b = apply_action(&b, Action::new(0, 0)).unwrap();
        assert_eq!(b, board("O../.X./..."));
    }

    #[test]
    fn test_apply_action_errors() {
        let b = board("X../.../...");
        assert_eq!(apply_action(&b, Action::new(3, 0)), Err(MoveError::OutOfBounds));
        assert_eq!(apply_action(&b, Action::new(0, 7)), Err(MoveError::OutOfBounds));
        assert_eq!(apply_action(&b, Action::new(0, 0)), Err(MoveError::CellOccupied));
    }

    #[test]
    fn test_winner_row() {
        let b = board("XXX/OO./...");
        assert_eq!(winner(&b), Some(Player::X));
        assert!(is_terminal(&b));
        assert_eq!(utility(&b), 1);
        assert_eq!(outcome(&b), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_winner_column_and_diagonals() {
        assert_eq!(winner(&board("OX./OX./O.X")), Some(Player::O));
        assert_eq!(winner(&board("XO./OX./..X")), Some(Player::X));
        assert_eq!(winner(&board("XXO/XO./O..")), Some(Player::O));
        assert_eq!(utility(&board("XXO/XO./O..")), -1);
    }

    #[test]
    fn test_winner_malformed_board_first_line() {
        // Both a row of X and a row of O; rows are scanned top to bottom
        let b = board("OOO/XXX/...");
        assert_eq!(winner(&b), Some(Player::O));
        let b = board("XXX/OOO/...");
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn test_draw() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(winner(&b), None);
        assert!(is_terminal(&b));
        assert_eq!(utility(&b), 0);
        assert_eq!(outcome(&b), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_utility_non_terminal_is_zero() {
        assert_eq!(utility(&board("X../.O./...")), 0);
    }
}
