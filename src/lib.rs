//! tictactoe-minimax: a tic-tac-toe engine with exhaustive minimax search.
//!
//! The crate models the 3x3 game as immutable board snapshots and finds
//! optimal moves by searching the complete game tree.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, and utility values
//! - [`board`] - Players, cells, actions, and the board itself
//! - [`game`] - Rules: turn order, legal moves, win detection, utility
//! - [`minimax`] - Exhaustive minimax search
//! - [`playout`] - Random move selection and random playouts
//! - [`console`] - Line-based text command protocol
//! - [`driver`] - Interactive game loop between humans, engine, and random mover
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::board::Action;
//! use tictactoe_minimax::game::{apply_action, initial_state};
//! use tictactoe_minimax::minimax::best_action;
//!
//! // X opens in the corner
//! let board = apply_action(&initial_state(), Action::new(0, 0)).unwrap();
//!
//! // The only reply that holds the draw is the center
//! assert_eq!(best_action(&board), Some(Action::new(1, 1)));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod driver;
pub mod game;
pub mod minimax;
pub mod playout;
