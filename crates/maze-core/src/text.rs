//! Text form of a [`Grid`]: one line per row, one glyph per cell.
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! See [`Label::from_glyph`] for the accepted glyphs. Leading and trailing
//! empty lines are ignored; all other lines must have the same width.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Coord, Dims};
use crate::grid::Grid;
use crate::label::Label;

impl Grid {
    /// Parse a grid from its text form.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let body = match (first, last) {
            (Some(a), Some(b)) => &lines[a..=b],
            _ => return Grid::from_labels(0, 0, Vec::new()),
        };

        let width = body[0].chars().count();
        let mut cells = Vec::with_capacity(width * body.len());
        for (row, line) in body.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: width,
                    actual,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let label = Label::from_glyph(ch).ok_or(GridError::InvalidGlyph {
                    ch,
                    at: Coord::new(row as i32, col as i32),
                })?;
                cells.push(label);
            }
        }

        let (Ok(rows), Ok(cols)) = (i32::try_from(body.len()), i32::try_from(width)) else {
            return Err(GridError::TooLarge {
                rows: body.len(),
                cols: width,
            });
        };
        Ok(Grid::from_parts(Dims::new(rows, cols), cells))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Writes the grid back in text form, using `.` for free cells so that
/// lines never end in whitespace.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = match self.label(Coord::new(row, col)) {
                    Label::Free => '.',
                    other => other.glyph(),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "
S..#
.#..
...E
";

    #[test]
    fn parse_basic() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.dims(), Dims::new(3, 4));
        assert_eq!(g.find(Label::Origin), Some(Coord::new(0, 0)));
        assert_eq!(g.find(Label::Destination), Some(Coord::new(2, 3)));
        assert!(g.is_blocked(Coord::new(0, 3)));
        assert!(g.is_blocked(Coord::new(1, 1)));
        assert_eq!(g.count(Label::Blocked), 2);
    }

    #[test]
    fn parse_digits_and_crlf() {
        let g: Grid = "2010\r\n0003\r\n".parse().unwrap();
        assert_eq!(g.to_codes(), vec![2, 0, 1, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::parse(MAZE).unwrap();
        let text = g.to_string();
        assert_eq!(text, "S..X\n.X..\n...E\n");
        assert_eq!(Grid::parse(&text).unwrap(), g);
    }

    #[test]
    fn inconsistent_width() {
        let err = Grid::parse("S..\n..\n..E").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn invalid_glyph() {
        let err = Grid::parse("S.?\n..E").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidGlyph {
                ch: '?',
                at: Coord::new(0, 2)
            }
        );
    }

    #[test]
    fn blank_input_is_empty_grid() {
        let g = Grid::parse("\n\n").unwrap();
        assert!(g.is_empty());
    }
}
