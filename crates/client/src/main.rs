//! Headless simulator for the horror-game cores.
//!
//! Runs circuit puzzles and scripted player sessions from content files and
//! prints what happened. Logs go to stderr; `RUST_LOG` overrides the INFO
//! default.
//!
//! # Examples
//!
//! ```bash
//! horror-sim circuit crates/game/content/data/circuits/generator.ron --rotate 0,0 --save gen.json
//! horror-sim circuit fuse_box --rotate 1,0 --rotate 1,0 --format json
//! horror-sim player crates/game/content/data/motion.ron --frames 600
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{CircuitCmd, PlayerCmd};
use config::SimConfig;

/// Headless simulator for circuit puzzles and player motion
#[derive(Parser)]
#[command(name = "horror-sim")]
#[command(about = "Headless simulator for circuit puzzles and player motion", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load a circuit layout, rotate components and report the result
    Circuit(CircuitCmd),

    /// Run a scripted player session against a motion preset catalog
    Player(PlayerCmd),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging();

    let config = SimConfig::from_env();
    tracing::debug!(?config, "simulation configuration");

    match cli.command {
        Command::Circuit(cmd) => cmd.execute(&config),
        Command::Player(cmd) => cmd.execute(&config),
    }
}
