//! tictactoe: a textual driver for the minimax engine.
//!
//! ## Usage
//!
//! - `tictactoe` - Show a demo
//! - `tictactoe play` - Play against the engine
//! - `tictactoe selfplay` - Watch the engine play itself
//! - `tictactoe best XOX/.XO/...` - Analyze a board
//! - `tictactoe random` - Engine against a random mover
//! - `tictactoe console` - Start the text command protocol

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tictactoe_minimax::board::Board;
use tictactoe_minimax::console::ConsoleEngine;
use tictactoe_minimax::constants::{DEFAULT_RANDOM_GAMES, DEFAULT_SEED, DEMO_BOARD};
use tictactoe_minimax::driver::{Controller, GameOptions, Seats, play_game, run_series};
use tictactoe_minimax::game::{current_player, is_terminal, legal_actions, outcome};
use tictactoe_minimax::minimax::{dump_evaluations, minimax};

/// tictactoe: tic-tac-toe with an exhaustive minimax engine
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo of the engine
    Demo,
    /// Play an interactive game
    Play {
        /// Which side(s) the human plays
        #[arg(long, value_enum, default_value_t = Side::X)]
        human: Side,
        /// Who plays the other side
        #[arg(long, value_enum, default_value_t = Opponent::Engine)]
        opponent: Opponent,
        /// Seed for the random mover
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Let the engine play both sides
    Selfplay {
        /// Print per-move minimax values to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the player to move, legal moves, and best move for a board
    Best {
        /// Nine cells row by row, e.g. "XOX/.XO/..."
        board: String,
    },
    /// Play the engine against a random mover and report the tally
    Random {
        #[arg(long, default_value_t = DEFAULT_RANDOM_GAMES)]
        games: usize,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Start the line-based command protocol on stdin/stdout
    Console,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
    Both,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Engine,
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            human,
            opponent,
            seed,
        }) => run_play(human, opponent, seed),
        Some(Commands::Selfplay { verbose }) => run_selfplay(verbose),
        Some(Commands::Best { board }) => run_best(&board),
        Some(Commands::Random { games, seed }) => run_random(games, seed),
        Some(Commands::Console) => {
            let mut engine = ConsoleEngine::new();
            engine.run().context("console I/O failed")
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("tictactoe: exhaustive minimax engine\n");

    println!("=== Legal Moves Demo ===");
    let board: Board = DEMO_BOARD.parse()?;
    println!("{board}\n");
    let moves: Vec<String> = legal_actions(&board).iter().map(|a| a.to_string()).collect();
    println!("{} to move, legal moves: {}\n", current_player(&board), moves.join(" "));

    println!("=== Self-Play Demo ===");
    run_selfplay(false)
}

fn run_play(human: Side, opponent: Opponent, seed: u64) -> Result<()> {
    let other = match opponent {
        Opponent::Engine => Controller::Engine,
        Opponent::Random => Controller::Random,
    };
    let seats = match human {
        Side::X => Seats::new(Controller::Human, other),
        Side::O => Seats::new(other, Controller::Human),
        Side::Both => Seats::new(Controller::Human, Controller::Human),
    };
    let mut rng = fastrand::Rng::with_seed(seed);
    let options = GameOptions { verbose: false };
    play_game(
        seats,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut rng,
        &options,
    )?;
    Ok(())
}

fn run_selfplay(verbose: bool) -> Result<()> {
    let seats = Seats::new(Controller::Engine, Controller::Engine);
    let mut rng = fastrand::Rng::with_seed(DEFAULT_SEED);
    let options = GameOptions { verbose };
    play_game(
        seats,
        &mut io::empty(),
        &mut io::stdout().lock(),
        &mut rng,
        &options,
    )?;
    Ok(())
}

fn run_best(text: &str) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("invalid board \"{text}\""))?;
    println!("{board}\n");

    if is_terminal(&board) {
        if let Some(result) = outcome(&board) {
            println!("Game over: {result}");
        }
        return Ok(());
    }

    let moves: Vec<String> = legal_actions(&board).iter().map(|a| a.to_string()).collect();
    println!("To move: {}", current_player(&board));
    println!("Legal moves: {}", moves.join(" "));

    dump_evaluations(&board);
    let eval = minimax(&board);
    if let Some(action) = eval.action {
        println!("Best move: {action} (value {:+}, {} positions searched)", eval.value, eval.nodes);
    }
    Ok(())
}

fn run_random(games: usize, seed: u64) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    println!("Playing {games} games, engine vs random (seed {seed})...");
    let stats = run_series(Controller::Engine, Controller::Random, games, &mut rng)?;
    println!(
        "Engine: {} wins, {} draws, {} losses",
        stats.wins, stats.draws, stats.losses
    );
    Ok(())
}
