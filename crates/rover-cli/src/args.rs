//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use rover_core::{DEFAULT_BATTERY, Pos};
use rover_paths::Strategy;

/// Run battery-constrained searches over a terrain grid
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "rover", version, about, long_about = None)]
pub struct Args {
    /// Strategies to run, one search each: dfs, bfs, best (default: all three)
    #[arg(value_name = "STRATEGY", value_parser = clap::value_parser!(Strategy))]
    pub strategies: Vec<Strategy>,

    /// Read the terrain grid from FILE instead of the built-in 6x6 map
    #[arg(long, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Start cell
    #[arg(long, value_name = "R,C", value_parser = parse_pos, default_value = "0,0")]
    pub start: Pos,

    /// Heuristic fallback goal, used when the grid has no G cell
    #[arg(long, value_name = "R,C", value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// Initial battery
    #[arg(long, default_value_t = DEFAULT_BATTERY, allow_negative_numbers = true)]
    pub battery: i32,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print every visited state
    #[arg(long)]
    pub trace: bool,

    /// Log search progress to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Selected strategies in command-line order, without repeats.
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            return Strategy::ALL.to_vec();
        }
        let mut out = Vec::with_capacity(self.strategies.len());
        for &s in &self.strategies {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }

    /// Log level implied by the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse `R,C` into a position.
fn parse_pos(s: &str) -> Result<Pos, String> {
    let bad = || format!("invalid cell \u{201c}{s}\u{201d}, expected R,C");
    let (r, c) = s.split_once(',').ok_or_else(bad)?;
    let row = r.trim().parse().map_err(|_| bad())?;
    let col = c.trim().parse().map_err(|_| bad())?;
    Ok(Pos::new(row, col))
}
