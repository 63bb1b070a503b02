//! Othello-Rust: a console driver for the Othello engine.
//!
//! ## Usage
//!
//! - `othello-rust` - Replay the bundled reference game
//! - `othello-rust demo` - Same as above
//! - `othello-rust replay <file>` - Replay a move script
//! - `othello-rust selfplay` - Play random games
//! - `othello-rust protocol` - Start the text protocol on stdin/stdout

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_rust::board::Color;
use othello_rust::error::format_coords;
use othello_rust::playout::playout_with;
use othello_rust::protocol::ProtocolEngine;
use othello_rust::render::render;
use othello_rust::script::{REFERENCE_GAME, ScriptMove, parse_script};
use othello_rust::session::{GameSession, MoveResult};

/// Othello-Rust: a two-player disc-flipping board game engine
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "othello_rust=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the bundled reference game
    Demo(ReplayOptions),
    /// Replay a move script (one `<color> <col> <row>` per line)
    Replay {
        /// Path to the script
        path: PathBuf,
        #[command(flatten)]
        options: ReplayOptions,
    },
    /// Play games with uniformly random legal moves
    Selfplay {
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
        /// Only print the result of each game
        #[arg(long)]
        quiet: bool,
    },
    /// Start the line-oriented text protocol on stdin/stdout
    Protocol(Names),
}

#[derive(Args, Clone)]
struct Names {
    /// Display name of the black player
    #[arg(long, default_value = "Leo")]
    black: String,
    /// Display name of the white player
    #[arg(long, default_value = "Helen")]
    white: String,
}

#[derive(Args, Clone)]
struct ReplayOptions {
    #[command(flatten)]
    names: Names,
    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            names: Names {
                black: "Leo".to_string(),
                white: "Helen".to_string(),
            },
            quiet: false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Commands::Demo(options)) => replay(REFERENCE_GAME, &options),
        None => replay(REFERENCE_GAME, &ReplayOptions::default()),
        Some(Commands::Replay { path, options }) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            replay(&text, &options)
        }
        Some(Commands::Selfplay { seed, games, quiet }) => selfplay(seed, games, quiet),
        Some(Commands::Protocol(names)) => {
            let mut engine = ProtocolEngine::new(names.black, names.white);
            engine.run_stdio().context("protocol I/O failed")
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn replay(text: &str, options: &ReplayOptions) -> Result<()> {
    let moves = parse_script(text).context("invalid move script")?;
    let mut session = GameSession::new(options.names.black.clone(), options.names.white.clone());
    if !options.quiet {
        println!("{}\n", render(&session));
    }

    for ScriptMove { line, color, coord } in moves {
        let result = session
            .submit_move(color, coord)
            .with_context(|| format!("line {line}: {color} at {coord}"))?;
        match result {
            MoveResult::Applied { .. } => {
                if !options.quiet {
                    println!("{color} plays {coord}");
                    println!("{}\n", render(&session));
                }
            }
            MoveResult::Passed { color } => println!("{color} has no legal move: pass turn"),
            MoveResult::Invalid { legal_moves } => println!(
                "line {line}: {color} cannot play {coord}; valid moves: {}",
                format_coords(&legal_moves)
            ),
            MoveResult::GameOver(outcome) => {
                if !options.quiet {
                    println!("{}\n", render(&session));
                }
                println!("{outcome}");
                return Ok(());
            }
        }
    }

    println!(
        "Script finished with the game in progress (black {} | white {})",
        session.score(Color::Black),
        session.score(Color::White)
    );
    Ok(())
}

fn selfplay(seed: Option<u64>, games: usize, quiet: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    for game in 1..=games {
        let mut session = GameSession::new("Black", "White");
        let (outcome, stats) = playout_with(&mut session, &mut rng, |color, result, session| {
            if quiet {
                return;
            }
            match result {
                MoveResult::Applied { coord, .. } => {
                    println!("{color} plays {coord}");
                    println!("{}\n", render(session));
                }
                MoveResult::Passed { color } => println!("{color} passes"),
                MoveResult::Invalid { .. } | MoveResult::GameOver(_) => {}
            }
        })
        .with_context(|| format!("self-play game {game} failed"))?;

        println!(
            "Game {game}: {outcome} (black {} | white {}, {} moves, {} passes)",
            session.score(Color::Black),
            session.score(Color::White),
            stats.moves,
            stats.passes
        );
    }
    Ok(())
}
