//! Run a circuit layout headlessly.
//!
//! Loads a RON layout, applies rotations in order and reports which inputs
//! ended up powered.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use horror_content::{CircuitLayoutLoader, ContentFactory};
use horror_core::grid::GridCoord;
use horror_runtime::{CircuitSession, TracingListener};

use crate::config::SimConfig;

/// Rotate components of a circuit layout and report the result
#[derive(Parser)]
pub struct CircuitCmd {
    /// Circuit layout file (RON), or the name of a layout under `circuits/`
    /// in the data directory
    #[arg(value_name = "LAYOUT")]
    layout: PathBuf,

    /// Rotate the component at x,y by a quarter turn (repeatable, applied in order)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_coord)]
    rotate: Vec<GridCoord>,

    /// Restore a JSON snapshot before rotating
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Write the final state as a JSON snapshot
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Connection status per input
    Summary,
    /// Final snapshot as JSON
    Json,
}

impl CircuitCmd {
    pub fn execute(self, config: &SimConfig) -> Result<()> {
        let puzzle = if self.layout.exists() {
            CircuitLayoutLoader::load_puzzle(&self.layout)?
        } else {
            let name = self.layout.to_string_lossy();
            ContentFactory::new(&config.data_dir).load_circuit(&name)?
        };
        tracing::info!(
            layout = %self.layout.display(),
            columns = puzzle.size().columns,
            rows = puzzle.size().rows,
            "circuit loaded"
        );

        let mut session = CircuitSession::new(puzzle);
        session.add_listener(TracingListener);
        session.flush();

        if let Some(path) = &self.load {
            let report = session
                .load_from(path)
                .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
            for err in &report.errors {
                tracing::warn!("{err}");
            }
        }

        let turned = session.rotate_all(self.rotate.iter().copied())?;
        if turned < self.rotate.len() {
            tracing::info!(
                ignored = self.rotate.len() - turned,
                "rotations ignored after the circuit locked"
            );
        }

        if let Some(path) = &self.save {
            session
                .save_to(path)
                .with_context(|| format!("Failed to save snapshot: {}", path.display()))?;
        }

        match self.format {
            OutputFormat::Summary => print_summary(&session),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&session.puzzle().save())?)
            }
        }

        Ok(())
    }
}

fn print_summary(session: &CircuitSession) {
    let puzzle = session.puzzle();

    println!("connected: {}", puzzle.is_connected());
    println!("locked:    {}", puzzle.is_locked());
    for input in puzzle.inputs() {
        let powered = puzzle.input_connected(input.id).unwrap_or(false);
        println!(
            "  input #{} at {} facing {}: {}",
            input.id,
            input.coord,
            input.direction,
            if powered { "powered" } else { "dark" }
        );
    }
    for component in puzzle.components().iter().filter(|c| !c.groups().is_empty()) {
        let powered = component.groups().iter().filter(|g| g.is_powered()).count();
        println!(
            "  {} rotation {:>3}  groups {}/{} powered",
            component.coord(),
            component.rotation().degrees(),
            powered,
            component.groups().len()
        );
    }
}

/// Parses `x,y` into a grid coordinate.
fn parse_coord(value: &str) -> Result<GridCoord, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y '{y}': {e}"))?;
    Ok(GridCoord::new(x, y))
}
