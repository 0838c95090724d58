//! The [`Canvas`] type: a 2D block of characters tagged with what they show.
//!
//! Diagrams are drawn into a canvas rather than straight into a string so
//! that front ends can colour glyphs by their [`Mark`] while plain output
//! stays a simple [`Display`](std::fmt::Display).

use std::fmt;

/// What a glyph on the canvas depicts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Background space.
    #[default]
    Blank,
    /// Cell borders.
    Frame,
    /// Origin or destination marker.
    Label,
    /// A blocked cell.
    Blocked,
    /// Digits of a distance value.
    Distance,
    /// A cell visited by a path.
    Node,
    /// The connection between two consecutive path cells.
    Edge,
}

/// A single character with its [`Mark`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub mark: Mark,
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            mark: Mark::Blank,
        }
    }
}

/// A fixed-size character canvas, addressed as `(line, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, line: usize, col: usize) -> Option<usize> {
        (line < self.height && col < self.width).then(|| line * self.width + col)
    }

    /// Glyph at `(line, col)`, or `None` outside the canvas.
    pub fn get(&self, line: usize, col: usize) -> Option<Glyph> {
        self.index(line, col).map(|i| self.glyphs[i])
    }

    /// Draw one character. Writes outside the canvas are ignored.
    pub fn put(&mut self, line: usize, col: usize, ch: char, mark: Mark) {
        if let Some(i) = self.index(line, col) {
            self.glyphs[i] = Glyph { ch, mark };
        }
    }

    /// Draw a string left to right starting at `(line, col)`.
    pub fn put_str(&mut self, line: usize, col: usize, s: &str, mark: Mark) {
        for (k, ch) in s.chars().enumerate() {
            self.put(line, col + k, ch, mark);
        }
    }

    /// Iterator over the canvas lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[Glyph]> + '_ {
        self.glyphs.chunks(self.width.max(1)).take(self.height)
    }

    /// Count glyphs carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.glyphs.iter().filter(|g| g.mark == mark).count()
    }
}

/// Plain text, one `\n`-terminated line per canvas line.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            for g in line {
                write!(f, "{}", g.ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
