//! The `rover` binary: run battery-constrained searches over a terrain grid.

mod args;
mod error;
mod report;

use std::fs;

use clap::Parser;
use rover_core::TerrainGrid;
use rover_paths::SearchRequest;

use args::Args;
use error::CliError;
use report::Report;

fn load_grid(args: &Args) -> Result<TerrainGrid, CliError> {
    match &args.grid {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(text.parse::<TerrainGrid>()?)
        }
        None => Ok(TerrainGrid::rover_default()),
    }
}

/// Run every selected strategy against one validated request.
fn search(args: &Args, grid: &TerrainGrid) -> Result<Vec<Report>, CliError> {
    let req = SearchRequest {
        grid,
        start: args.start,
        goal: args.goal,
        battery: args.battery,
    };
    req.validate()?;

    let strategies = args.strategies();
    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        reports.push(Report {
            strategy,
            result: strategy.run(&req)?,
        });
    }
    Ok(reports)
}

fn run(args: &Args) -> Result<String, CliError> {
    let grid = load_grid(args)?;
    log::debug!(
        "loaded {} grid with {} goal cell(s)",
        grid.bounds(),
        grid.goals().len()
    );
    let reports = search(args, &grid)?;

    if args.json {
        let mut out = report::json(&reports)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(reports
        .iter()
        .map(|r| r.text(args.trace).to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    // RUST_LOG, when set, overrides the -v level.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_env("RUST_LOG")
        .init();

    print!("{}", run(&args)?);
    Ok(())
}
