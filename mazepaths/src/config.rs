//! Command-line options.
//!
//! # Examples
//!
//! Solve the default scenario:
//!
//! ```text
//! $ mazepaths
//! ```
//!
//! Solve a maze file, keeping at most 20 paths, with colours:
//!
//! ```text
//! $ mazepaths --file mazepaths/scenarios/ring.txt --max-paths 20 --color
//! ```
//!
//! Solve a reproducible random 12x16 maze:
//!
//! ```text
//! $ mazepaths --random 12x16 --density 0.25 --seed 7
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::scenario::DEFAULT_SCENARIO;

/// Paths kept when no limit is given. Open mazes have exponentially many
/// shortest paths; the count is still reported in full.
pub const DEFAULT_MAX_PATHS: usize = 1000;

/// Find and draw every shortest path through a maze.
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Built-in scenario to solve
    #[arg(short, long, conflicts_with_all = ["file", "random"])]
    pub scenario: Option<String>,

    /// Maze file to solve: a text maze, or a .json scenario
    #[arg(short, long, conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Solve a random maze of the given size, e.g. 10x12
    #[arg(short, long, value_name = "ROWSxCOLS", value_parser = parse_size)]
    pub random: Option<(usize, usize)>,

    /// Fraction of blocked cells in a random maze
    #[arg(long, default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random maze
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Keep at most this many paths
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_PATHS)]
    pub max_paths: usize,

    /// Keep every shortest path, however many there are
    #[arg(long, conflicts_with = "max_paths", default_value_t = false)]
    pub all_paths: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Colour the diagrams
    #[arg(short, long, default_value_t = false)]
    pub color: bool,

    /// List the built-in scenarios
    #[arg(short, long, default_value_t = false)]
    pub list: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// How the report is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Diagrams and summary lines
    #[default]
    Text,
    /// A JSON summary with every path
    Json,
}

/// Where the maze comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Builtin(String),
    File(PathBuf),
    Random {
        rows: usize,
        cols: usize,
        density: f64,
        seed: Option<u64>,
    },
}

/// Settings for one run of the program.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: Source,
    pub max_paths: Option<usize>,
    pub format: Format,
    pub color: bool,
    pub list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Builtin(DEFAULT_SCENARIO.to_string()),
            max_paths: Some(DEFAULT_MAX_PATHS),
            format: Format::Text,
            color: false,
            list: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = match (args.file, args.random, args.scenario) {
            (Some(path), _, _) => Source::File(path),
            (None, Some((rows, cols)), _) => Source::Random {
                rows,
                cols,
                density: args.density,
                seed: args.seed,
            },
            (None, None, Some(name)) => Source::Builtin(name),
            (None, None, None) => Source::Builtin(DEFAULT_SCENARIO.to_string()),
        };
        Self {
            source,
            max_paths: (!args.all_paths).then_some(args.max_paths),
            format: args.format,
            color: args.color,
            list: args.list,
        }
    }
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: usize = r
        .trim()
        .parse()
        .map_err(|e| format!("bad row count {r:?}: {e}"))?;
    let cols: usize = c
        .trim()
        .parse()
        .map_err(|e| format!("bad column count {c:?}: {e}"))?;
    if rows.saturating_mul(cols) < 2 {
        return Err(format!("{s} has room for fewer than two cells"));
    }
    Ok((rows, cols))
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("bad density {s:?}: {e}"))?;
    if !(0.0..=1.0).contains(&d) {
        return Err(format!("density must be between 0 and 1, got {d}"));
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> Config {
        let mut full = vec!["mazepaths"];
        full.extend_from_slice(argv);
        Config::from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn default_is_builtin_scenario() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn scenario_and_limit() {
        let c = config(&["--scenario", "small", "-n", "3", "--color"]);
        assert_eq!(c.source, Source::Builtin("small".into()));
        assert_eq!(c.max_paths, Some(3));
        assert!(c.color);
    }

    #[test]
    fn paths_are_capped_unless_asked() {
        assert_eq!(config(&[]).max_paths, Some(DEFAULT_MAX_PATHS));
        assert_eq!(config(&["--all-paths"]).max_paths, None);
        let mut full = vec!["mazepaths"];
        full.extend_from_slice(&["--all-paths", "-n", "5"]);
        assert!(Args::try_parse_from(full).is_err());
    }

    #[test]
    fn random_source() {
        let c = config(&["--random", "4x9", "--density", "0.5", "--seed", "11"]);
        assert_eq!(
            c.source,
            Source::Random {
                rows: 4,
                cols: 9,
                density: 0.5,
                seed: Some(11)
            }
        );
    }

    #[test]
    fn file_source_and_json() {
        let c = config(&["-f", "maze.txt", "--format", "json"]);
        assert_eq!(c.source, Source::File(PathBuf::from("maze.txt")));
        assert_eq!(c.format, Format::Json);
    }

    #[test]
    fn rejects_conflicts_and_bad_values() {
        let parse = |argv: &[&str]| {
            let mut full = vec!["mazepaths"];
            full.extend_from_slice(argv);
            Args::try_parse_from(full)
        };
        assert!(parse(&["--scenario", "ring", "--file", "x.txt"]).is_err());
        assert!(parse(&["--random", "4by4"]).is_err());
        assert!(parse(&["--random", "4x4", "--density", "1.5"]).is_err());
        assert!(parse(&["--seed", "3"]).is_err());
    }

    #[test]
    fn size_parser() {
        assert_eq!(parse_size("3x5"), Ok((3, 5)));
        assert_eq!(parse_size("10X2"), Ok((10, 2)));
        assert!(parse_size("x5").is_err());
        assert!(parse_size("1x1").is_err());
        assert!(parse_size("0x7").is_err());
        assert_eq!(parse_size("1x2"), Ok((1, 2)));
    }
}
