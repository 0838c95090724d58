//! Maze inputs: built-in scenarios and scenario files.
//!
//! Scenarios are plain data fed through the grid construction contract;
//! nothing downstream depends on which one was loaded.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use maze_core::{Grid, GridError};
use serde::{Deserialize, Serialize};

/// A named maze ready to be solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub grid: Grid,
}

/// A built-in maze in text form.
pub struct Builtin {
    pub name: &'static str,
    pub about: &'static str,
    pub text: &'static str,
}

/// Scenario used when none is requested.
pub const DEFAULT_SCENARIO: &str = "ring";

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "ring",
        about: "7x6, origin boxed in on three sides",
        text: "
......
....X.
..XXX.
E.XS..
..XXX.
....X.
......
",
    },
    Builtin {
        name: "small",
        about: "4x4 with a few walls",
        text: "
S..X
....
..X.
X..E
",
    },
    Builtin {
        name: "islands",
        about: "8x8 with scattered walls",
        text: "
.X......
.XSX.XX.
.X.X....
......X.
XX.X....
X....X..
XX.X..E.
...X....
",
    },
    Builtin {
        name: "lattice",
        about: "9x9 checkerboard of posts",
        text: "
SX.X.X.X.
.........
X.X.X.X.X
.........
.X.X.X.X.
.........
X.X.X.X.X
.........
.X.X.X.XE
",
    },
    Builtin {
        name: "square",
        about: "2x2, no walls",
        text: "
S.
.E
",
    },
    Builtin {
        name: "detour",
        about: "3x3, one post between origin and destination",
        text: "
...
SXE
...
",
    },
    Builtin {
        name: "wall",
        about: "destination sealed off by a full-height wall",
        text: "
S.X..
..X.E
..X..
",
    },
];

/// On-disk JSON form: dimensions plus flat row-major label codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub name: Option<String>,
    pub rows: usize,
    pub cols: usize,
    pub labels: Vec<i32>,
}

impl Scenario {
    /// Look up a built-in scenario by name.
    pub fn builtin(name: &str) -> Result<Self, ScenarioError> {
        let b = BUILTINS
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| ScenarioError::Unknown(name.to_string()))?;
        Ok(Self {
            name: b.name.to_string(),
            grid: Grid::parse(b.text)?,
        })
    }

    /// Load a scenario file.
    ///
    /// Files ending in `.json` hold a [`ScenarioFile`]; anything else is a
    /// text maze.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "maze".to_string());

        let is_json = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let scenario = if is_json {
            Self::from_json(&text, &stem)?
        } else {
            Self {
                name: stem,
                grid: Grid::parse(&text)?,
            }
        };
        debug!(
            "loaded scenario {} ({}) from {}",
            scenario.name,
            scenario.grid.dims(),
            path.display()
        );
        Ok(scenario)
    }

    /// Parse the JSON form, naming the scenario `fallback` if it has no name.
    pub fn from_json(text: &str, fallback: &str) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = serde_json::from_str(text)?;
        let grid = Grid::from_labels(file.rows, file.cols, file.labels)?;
        Ok(Self {
            name: file.name.unwrap_or_else(|| fallback.to_string()),
            grid,
        })
    }

    /// The JSON form of this scenario.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        let file = ScenarioFile {
            name: Some(self.name.clone()),
            rows: self.grid.rows() as usize,
            cols: self.grid.cols() as usize,
            labels: self.grid.to_codes(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

/// Errors that can occur while obtaining a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// No built-in scenario has this name.
    Unknown(String),
    /// The scenario file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON scenario is malformed.
    Json(serde_json::Error),
    /// The labels do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => {
                write!(f, "unknown scenario {name:?} (use --list to see them)")
            }
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid scenario file: {e}"),
            Self::Grid(e) => write!(f, "invalid maze: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unknown(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for ScenarioError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
