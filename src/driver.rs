//! Interactive game loop.
//!
//! A game is played between two [`Controller`]s, one per side. Humans type
//! their moves as `row col`; the engine uses minimax and the random mover
//! picks any empty cell. Rejected human input is reported and asked for
//! again, and the board of record stays as it was before the bad move.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use fastrand::Rng;

use crate::board::{Action, Board, Player};
use crate::game::{GameOutcome, apply_action, current_player, initial_state, outcome};
use crate::minimax::{best_action, dump_evaluations};
use crate::playout::random_action;

/// Who picks the moves for one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Engine,
    Random,
}

/// The controllers seated at X and O.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Seats {
    pub x: Controller,
    pub o: Controller,
}

impl Seats {
    pub fn new(x: Controller, o: Controller) -> Self {
        Self { x, o }
    }

    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// The same controllers with sides swapped.
    pub fn swapped(&self) -> Self {
        Self {
            x: self.o,
            o: self.x,
        }
    }
}

/// Options for a single game.
pub struct GameOptions {
    /// Dump per-action minimax values to stderr before each engine move
    pub verbose: bool,
}

/// Play one game from the empty board, printing each position to `output`.
pub fn play_game<R: BufRead, W: Write>(
    seats: Seats,
    input: &mut R,
    output: &mut W,
    rng: &mut Rng,
    options: &GameOptions,
) -> Result<GameOutcome> {
    let mut board = initial_state();
    writeln!(output, "{board}\n")?;

    loop {
        if let Some(result) = outcome(&board) {
            writeln!(output, "Game over: {result}")?;
            return Ok(result);
        }

        let player = current_player(&board);
        let action = match seats.controller(player) {
            Controller::Human => read_human_action(&board, player, input, output)?,
            Controller::Engine => {
                if options.verbose {
                    dump_evaluations(&board);
                }
                let action = best_action(&board)
                    .ok_or_else(|| anyhow!("engine found no move on a live board"))?;
                writeln!(output, "{player} (engine) plays {action}")?;
                action
            }
            Controller::Random => {
                let action = random_action(&board, rng)
                    .ok_or_else(|| anyhow!("random mover found no move on a live board"))?;
                writeln!(output, "{player} (random) plays {action}")?;
                action
            }
        };

        board = apply_action(&board, action)
            .with_context(|| format!("{player} chose an illegal move {action}"))?;
        writeln!(output, "{board}\n")?;
    }
}

/// Play one game with no human seats and no output.
pub fn play_silent(seats: Seats, rng: &mut Rng) -> Result<GameOutcome> {
    if seats.x == Controller::Human || seats.o == Controller::Human {
        bail!("silent games cannot seat a human");
    }
    let options = GameOptions { verbose: false };
    play_game(seats, &mut io::empty(), &mut io::sink(), rng, &options)
}

/// Prompt until the human enters a move that the board accepts.
fn read_human_action<R: BufRead, W: Write>(
    board: &Board,
    player: Player,
    input: &mut R,
    output: &mut W,
) -> Result<Action> {
    loop {
        write!(output, "{player} to move (row col): ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read move")?;
        if read == 0 {
            bail!("input closed before the game ended");
        }

        let action: Action = match line.parse() {
            Ok(a) => a,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };
        match apply_action(board, action) {
            Ok(_) => return Ok(action),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Tally of a series of games from one controller's point of view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl SeriesStats {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    fn record(&mut self, result: GameOutcome, side: Player) {
        match result {
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Win(p) if p == side => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
        }
    }
}

/// Play `games` silent games of `hero` against `opponent`.
///
/// The hero takes X in even-numbered games and O in odd-numbered ones.
pub fn run_series(
    hero: Controller,
    opponent: Controller,
    games: usize,
    rng: &mut Rng,
) -> Result<SeriesStats> {
    let mut stats = SeriesStats::default();
    let seats = Seats::new(hero, opponent);
    for i in 0..games {
        let (seats, side) = if i % 2 == 0 {
            (seats, Player::X)
        } else {
            (seats.swapped(), Player::O)
        };
        let result = play_silent(seats, rng)?;
        stats.record(result, side);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUIET: GameOptions = GameOptions { verbose: false };

    fn run(seats: Seats, script: &str) -> (Result<GameOutcome>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = Rng::with_seed(3);
        let result = play_game(seats, &mut input, &mut output, &mut rng, &QUIET);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_vs_human_x_wins() {
        let seats = Seats::new(Controller::Human, Controller::Human);
        let (result, text) = run(seats, "0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
        assert!(text.ends_with("Game over: X wins\n"));
    }

    #[test]
    fn test_bad_input_is_retried() {
        let seats = Seats::new(Controller::Human, Controller::Human);
        let script = "0 0\n0 0\n5 5\n-1 2\nhello\n1 0\n0 1\n1 1\n0 2\n";
        let (result, text) = run(seats, script);
        assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
        assert!(text.contains("illegal move: cell occupied"));
        assert!(text.contains("illegal move: coordinate out of bounds"));
        assert!(text.contains("expected \"row col\""));
    }

    #[test]
    fn test_input_closed_is_error() {
        let seats = Seats::new(Controller::Human, Controller::Human);
        let (result, _) = run(seats, "1 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_punishes_blunder() {
        // Human X opens in the corner then ignores O's threats
        let seats = Seats::new(Controller::Human, Controller::Engine);
        let (result, text) = run(seats, "0 0\n0 1\n2 2\n2 1\n2 0\n1 0\n");
        assert_eq!(result.unwrap(), GameOutcome::Win(Player::O));
        assert!(text.contains("O (engine) plays 1,1"));
    }

    #[test]
    fn test_engine_vs_engine_draws() {
        let mut rng = Rng::with_seed(0);
        let seats = Seats::new(Controller::Engine, Controller::Engine);
        assert_eq!(play_silent(seats, &mut rng).unwrap(), GameOutcome::Draw);
    }

    #[test]
    fn test_silent_rejects_human() {
        let mut rng = Rng::with_seed(0);
        let seats = Seats::new(Controller::Human, Controller::Engine);
        assert!(play_silent(seats, &mut rng).is_err());
    }

    #[test]
    fn test_seats_swapped() {
        let seats = Seats::new(Controller::Engine, Controller::Random);
        let swapped = seats.swapped();
        assert_eq!(swapped.controller(Player::X), Controller::Random);
        assert_eq!(swapped.controller(Player::O), Controller::Engine);
    }

    #[test]
    fn test_series_counts_games() {
        let mut rng = Rng::with_seed(11);
        let stats = run_series(Controller::Random, Controller::Random, 20, &mut rng).unwrap();
        assert_eq!(stats.games(), 20);
    }
}
