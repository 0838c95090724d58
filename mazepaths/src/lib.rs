//! mazepaths: find and draw every shortest path through a maze.
//!
//! The binary is a thin wrapper around [`run`]: it turns command-line
//! arguments into a [`Config`], picks the maze the config names, solves it
//! and prints the report.

pub mod config;
pub mod mapgen;
pub mod scenario;
pub mod solve;
pub mod term;

use std::error::Error;
use std::io::Write;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use config::{Args, Config, DEFAULT_MAX_PATHS, Format, Source};
pub use scenario::{BUILTINS, Scenario, ScenarioError};
pub use solve::{Report, SolveError, solve};

/// Produce the scenario `source` describes.
pub fn load(source: &Source) -> Result<Scenario, Box<dyn Error>> {
    let scenario = match source {
        Source::Builtin(name) => Scenario::builtin(name)?,
        Source::File(path) => Scenario::load(path)?,
        Source::Random {
            rows,
            cols,
            density,
            seed,
        } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            Scenario {
                name: format!("random {rows}x{cols}"),
                grid: mapgen::random_maze(*rows, *cols, *density, &mut rng)?,
            }
        }
    };
    Ok(scenario)
}

/// Execute one run of the program, writing everything to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    if config.list {
        for b in BUILTINS {
            writeln!(out, "{:<8} {}", b.name, b.about)?;
        }
        return Ok(());
    }

    let scenario = load(&config.source)?;
    debug!("solving {} ({})", scenario.name, scenario.grid.dims());
    let report = solve(scenario.grid, config.max_paths)?;

    match config.format {
        Format::Text => term::write_report(out, &report, config.color)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.summary())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
