//! Line-based text protocol for driving a game.
//!
//! The protocol follows the shape of GTP (Go Text Protocol): one command per
//! line, an optional numeric id in front, and a response starting with `=`
//! on success or `?` on failure, followed by an empty line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Reset to the empty board
//! - `showboard` - Print the current board
//! - `play <row> <col>` - Mark a cell for the player to move
//! - `genmove` - Let the engine choose and play a move
//! - `legal_moves` - List the empty cells
//! - `to_move` - Show whose turn it is
//! - `winner` - Show `X`, `O`, `draw`, or `none`
//! - `undo` - Take back the last move
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_minimax::console::ConsoleEngine;
//! let mut engine = ConsoleEngine::new();
//! engine.run();
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Action, Board};
use crate::game::{
    apply_action, current_player, initial_state, is_terminal, legal_actions, outcome, GameOutcome,
};
use crate::minimax::best_action;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "quit",
    "showboard",
    "to_move",
    "undo",
    "version",
    "winner",
];

/// Console engine state.
pub struct ConsoleEngine {
    /// Current board
    board: Board,
    /// Earlier boards, most recent last
    history: Vec<Board>,
}

impl Default for ConsoleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleEngine {
    /// Create an engine at the empty board.
    pub fn new() -> Self {
        Self::with_board(initial_state())
    }

    /// Create an engine starting from an arbitrary board.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = initial_state();
                self.history.clear();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "play" => {
                if args.is_empty() {
                    return (false, "missing arguments".to_string());
                }
                let action: Action = match args.join(" ").parse() {
                    Ok(a) => a,
                    Err(e) => return (false, e.to_string()),
                };
                self.play(action)
            }

            "genmove" => match best_action(&self.board) {
                Some(action) => {
                    let (ok, msg) = self.play(action);
                    if ok { (true, action.to_string()) } else { (false, msg) }
                }
                None => (false, "game is over".to_string()),
            },

            "legal_moves" => {
                let moves: Vec<String> = legal_actions(&self.board)
                    .iter()
                    .map(|a| a.to_string())
                    .collect();
                (true, moves.join(" "))
            }

            "to_move" => {
                if is_terminal(&self.board) {
                    (true, "none".to_string())
                } else {
                    (true, current_player(&self.board).to_string())
                }
            }

            "winner" => {
                let text = match outcome(&self.board) {
                    Some(GameOutcome::Win(p)) => p.to_string(),
                    Some(GameOutcome::Draw) => "draw".to_string(),
                    None => "none".to_string(),
                };
                (true, text)
            }

            "undo" => match self.history.pop() {
                Some(previous) => {
                    self.board = previous;
                    (true, String::new())
                }
                None => (false, "cannot undo".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Apply an action, keeping the current board if it is rejected.
    fn play(&mut self, action: Action) -> (bool, String) {
        if is_terminal(&self.board) {
            return (false, "game is over".to_string());
        }
        match apply_action(&self.board, action) {
            Ok(next) => {
                self.history.push(self.board);
                self.board = next;
                (true, String::new())
            }
            Err(e) => (false, e.to_string()),
        }
    }
}
