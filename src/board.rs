//! Board representation: players, cells, actions, and the 3x3 grid.
//!
//! A [`Board`] is a small `Copy` value. Moves never modify a board in place;
//! [`Board::with_mark`] hands back a fresh snapshot instead.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CHAR_EMPTY, CHAR_O, CHAR_X, CELLS, EMPTY_CHARS, N, SEPARATOR_CHARS};

/// One of the two sides. X moves first and maximizes utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing side.
    pub const fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// True for the side whose wins score positive utility.
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }

    pub const fn symbol(self) -> char {
        match self {
            Player::X => CHAR_X,
            Player::O => CHAR_O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(p),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => CHAR_EMPTY,
            Cell::Mark(p) => p.symbol(),
        }
    }
}

/// A (row, col) coordinate, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build an action from signed input (e.g. typed by a user).
    ///
    /// Negative coordinates cannot name a cell and are rejected here;
    /// coordinates past the edge are rejected when the action is applied.
    pub fn from_signed(row: i64, col: i64) -> Result<Self, MoveError> {
        let row = usize::try_from(row).map_err(|_| MoveError::OutOfBounds)?;
        let col = usize::try_from(col).map_err(|_| MoveError::OutOfBounds)?;
        Ok(Self { row, col })
    }

    pub const fn in_bounds(self) -> bool {
        self.row < N && self.col < N
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parse `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(ActionParseError::Malformed(s.trim().to_string()));
        };
        let row: i64 = row
            .parse()
            .map_err(|_| ActionParseError::Malformed(s.trim().to_string()))?;
        let col: i64 = col
            .parse()
            .map_err(|_| ActionParseError::Malformed(s.trim().to_string()))?;
        Ok(Action::from_signed(row, col)?)
    }
}

/// Errors from reading an action typed as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// Not two integers
    Malformed(String),
    /// Two integers, but not a usable coordinate
    Move(MoveError),
}

impl From<MoveError> for ActionParseError {
    fn from(err: MoveError) -> Self {
        ActionParseError::Move(err)
    }
}

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionParseError::Malformed(s) => {
                write!(f, "expected \"row col\", got \"{s}\"")
            }
            ActionParseError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ActionParseError {}

/// Reasons an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column lies outside the 3x3 grid
    OutOfBounds,
    /// Target cell already holds a mark
    CellOccupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: coordinate out of bounds"),
            MoveError::CellOccupied => write!(f, "illegal move: cell occupied"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Errors from parsing a board written as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator
    InvalidChar(char),
    /// The text did not describe exactly nine cells
    WrongCellCount(usize),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidChar(c) => write!(f, "invalid board character '{c}'"),
            BoardParseError::WrongCellCount(n) => {
                write!(f, "expected {CELLS} cells, found {n}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// A 3x3 tic-tac-toe grid, indexed `[row][col]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Cell; N]; N]) -> Self {
        Self { cells }
    }

    /// Contents of a cell, or `None` for coordinates off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Copy of this board with `player`'s mark at `action`.
    ///
    /// Only bounds are checked; the caller decides whether overwriting is legal.
    pub fn with_mark(&self, action: Action, player: Player) -> Result<Self, MoveError> {
        if !action.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }
        let mut next = *self;
        next.cells[action.row][action.col] = Cell::Mark(player);
        Ok(next)
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.iter_cells()
            .filter(|(_, c)| *c == Cell::Mark(player))
            .count()
    }

    /// Total number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.iter_cells().filter(|(_, c)| !c.is_empty()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.iter_cells()
            .filter(|(_, c)| c.is_empty())
            .map(|(a, _)| a)
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    fn iter_cells(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Action::new(row, col), cell))
        })
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks, `.`, `_` and `-` are empty. Whitespace,
    /// `/`, `|` and `,` are skipped so that `"XOX/.XO/..."` and a
    /// three-line grid both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            if ch.is_whitespace() || SEPARATOR_CHARS.contains(&ch) {
                continue;
            }
            let cell = match ch.to_ascii_uppercase() {
                CHAR_X => Cell::Mark(Player::X),
                CHAR_O => Cell::Mark(Player::O),
                c if EMPTY_CHARS.contains(&c) => Cell::Empty,
                _ => return Err(BoardParseError::InvalidChar(ch)),
            };
            parsed.push(cell);
        }
        if parsed.len() != CELLS {
            return Err(BoardParseError::WrongCellCount(parsed.len()));
        }

        let mut board = Board::new();
        for (i, cell) in parsed.into_iter().enumerate() {
            board.cells[i / N][i % N] = cell;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.mark_count(), 0);
        assert_eq!(board.empty_cells().count(), CELLS);
        assert!(!board.is_full());
    }

    #[test]
    fn test_parse_compact_and_grid() {
        let compact: Board = "XOX/.XO/...".parse().unwrap();
        let grid: Board = "X O X\n_ X O\n_ _ _".parse().unwrap();
        assert_eq!(compact, grid);
        assert_eq!(compact.get(0, 1), Some(Cell::Mark(Player::O)));
        assert_eq!(compact.get(1, 0), Some(Cell::Empty));
        assert_eq!(compact.count(Player::X), 3);
        assert_eq!(compact.count(Player::O), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z'))
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(10))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let board: Board = "XOX/.XO/...".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "X O X\n. X O\n. . .");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::new();
        let next = board.with_mark(Action::new(1, 1), Player::O).unwrap();
        assert_eq!(board.get(1, 1), Some(Cell::Empty));
        assert_eq!(next.get(1, 1), Some(Cell::Mark(Player::O)));
        assert_eq!(
            board.with_mark(Action::new(0, 3), Player::X),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_action_from_signed() {
        assert_eq!(Action::from_signed(2, 1), Ok(Action::new(2, 1)));
        assert_eq!(Action::from_signed(-1, 0), Err(MoveError::OutOfBounds));
        assert_eq!(Action::from_signed(0, -5), Err(MoveError::OutOfBounds));
        // Past-the-edge values are left for apply_action to reject
        assert!(!Action::from_signed(3, 0).unwrap().in_bounds());
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("1 2".parse::<Action>(), Ok(Action::new(1, 2)));
        assert_eq!(" 0,1 ".parse::<Action>(), Ok(Action::new(0, 1)));
        assert_eq!("2, 0".parse::<Action>(), Ok(Action::new(2, 0)));
        assert_eq!(
            "-1 0".parse::<Action>(),
            Err(ActionParseError::Move(MoveError::OutOfBounds))
        );
        assert!(matches!(
            "a b".parse::<Action>(),
            Err(ActionParseError::Malformed(_))
        ));
        assert!(matches!(
            "1".parse::<Action>(),
            Err(ActionParseError::Malformed(_))
        ));
        assert!(matches!(
            "1 2 3".parse::<Action>(),
            Err(ActionParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "XOX/.XO/...".parse().unwrap();
        let empties: Vec<Action> = board.empty_cells().collect();
        assert_eq!(
            empties,
            vec![
                Action::new(1, 0),
                Action::new(2, 0),
                Action::new(2, 1),
                Action::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_player_other() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert!(Player::X.is_maximizing());
        assert!(!Player::O.is_maximizing());
    }
}
