//! Command-line surface: argument parsing and command dispatch.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use symmetry::{Point, SymmetryMode, expand};

use crate::config::KolamConfig;
use crate::error::CliError;
use crate::plan;

#[derive(Parser, Debug)]
#[command(name = "kolam", about = "Symmetric kolam geometry: orbits, guide lines, and stroke replay")]
pub struct Cli {
    /// Canvas width in pixels (overrides KOLAM_CANVAS_WIDTH).
    #[arg(long, global = true)]
    pub width: Option<f64>,

    /// Canvas height in pixels (overrides KOLAM_CANVAS_HEIGHT).
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Symmetry mode, e.g. `vertical` or `radial-8` (overrides KOLAM_SYMMETRY_MODE).
    #[arg(long, global = true)]
    pub mode: Option<SymmetryMode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the symmetric orbit of one point.
    Expand {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        pressure: Option<f64>,
    },
    /// Print the guide lines for the active mode.
    Guides {
        /// Also print the background grid at the configured spacing.
        #[arg(long)]
        grid: bool,
    },
    /// Expand a saved design into a render plan. Reads stdin when PATH is `-`.
    Replay { path: PathBuf },
    /// List the supported modes.
    Modes,
}

/// Run `cli` against `config`, writing JSON to `out`.
pub fn run(cli: Cli, config: KolamConfig, stdin: impl Read, out: &mut impl Write) -> Result<(), CliError> {
    let config = config.with_overrides(cli.width, cli.height, cli.mode)?;
    tracing::debug!(mode = %config.mode, width = config.bounds.width, height = config.bounds.height, "resolved config");

    match cli.command {
        Command::Expand { x, y, pressure } => {
            let orbit = expand(Point { x, y, pressure }, config.mode, config.bounds)?;
            if orbit.len() < config.mode.nominal_count() {
                tracing::info!(kept = orbit.len(), nominal = config.mode.nominal_count(), "orbit truncated at canvas edge");
            }
            write_json(out, &orbit)
        }
        Command::Guides { grid } => {
            let spacing = grid.then_some(config.grid_spacing);
            write_json(out, &plan::build_guides(config.mode, config.bounds, spacing)?)
        }
        Command::Replay { path } => {
            let design = if path.as_os_str() == "-" {
                plan::read_design(stdin)?
            } else {
                plan::read_design(BufReader::new(File::open(&path)?))?
            };
            if cli.mode.is_some_and(|mode| mode != design.symmetry_mode) {
                tracing::warn!(design = %design.symmetry_mode, "--mode ignored; replay uses the design's own mode");
            }
            write_json(out, &plan::build_plan(&design, config.bounds)?)
        }
        Command::Modes => write_json(out, &plan::mode_table()),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
