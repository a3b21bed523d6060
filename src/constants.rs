//! Constants for board geometry, scoring, and driver defaults.
//!
//! The board is a fixed 3x3 grid stored row-major. Winning lines are listed
//! as coordinate triples so that win detection is a single table scan.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Number of three-in-a-row lines.
pub const LINE_COUNT: usize = 2 * N + 2;

/// Every winning line as (row, col) triples.
/// Order: rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const WIN_LINES: [[(usize, usize); N]; LINE_COUNT] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Utility Values
// =============================================================================

/// Utility of a board won by X (the maximizing player).
pub const UTILITY_X_WIN: i32 = 1;

/// Utility of a board won by O (the minimizing player).
pub const UTILITY_O_WIN: i32 = -1;

/// Utility of a draw or an undecided board.
pub const UTILITY_DRAW: i32 = 0;

// =============================================================================
// Board Text
// =============================================================================

/// Characters used when rendering cells.
pub const CHAR_X: char = 'X';
pub const CHAR_O: char = 'O';
pub const CHAR_EMPTY: char = '.';

/// Characters accepted as an empty cell when parsing.
pub const EMPTY_CHARS: &[char] = &['.', '_', '-'];

/// Separators skipped when parsing (in addition to whitespace).
pub const SEPARATOR_CHARS: &[char] = &['/', '|', ','];

// =============================================================================
// Driver Defaults
// =============================================================================

/// Default seed for the random mover.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of games for engine-vs-random runs.
pub const DEFAULT_RANDOM_GAMES: usize = 100;

/// Board shown by the demo (X O X / . X O / . . .).
pub const DEMO_BOARD: &str = "XOX/.XO/...";
