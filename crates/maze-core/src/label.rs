//! The [`Label`] type: what occupies a single maze cell.

use std::fmt;

use crate::error::GridError;

/// Content of a maze cell, drawn from the closed set used by maze sources:
/// `0` free, `1` blocked, `2` origin marker, `3` destination marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    #[default]
    Free,
    Blocked,
    Origin,
    Destination,
}

impl Label {
    /// All labels, in code order.
    pub const ALL: [Label; 4] = [
        Label::Free,
        Label::Blocked,
        Label::Origin,
        Label::Destination,
    ];

    /// Integer code of the label.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Label::Free => 0,
            Label::Blocked => 1,
            Label::Origin => 2,
            Label::Destination => 3,
        }
    }

    /// Whether movement into this cell is allowed.
    ///
    /// Origin and destination markers are passable like free cells.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Label::Blocked)
    }

    /// Glyph used when drawing the label in a diagram.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Label::Free => ' ',
            Label::Blocked => 'X',
            Label::Origin => 'S',
            Label::Destination => 'E',
        }
    }

    /// Parse a glyph from a text maze.
    ///
    /// Accepts the diagram glyphs, the digit codes, and `.`/`#` as aliases
    /// for free and blocked.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' | '.' | '0' => Some(Label::Free),
            'X' | 'x' | '#' | '1' => Some(Label::Blocked),
            'S' | 's' | '2' => Some(Label::Origin),
            'E' | 'e' | '3' => Some(Label::Destination),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Label {
    type Error = GridError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Free),
            1 => Ok(Label::Blocked),
            2 => Ok(Label::Origin),
            3 => Ok(Label::Destination),
            _ => Err(GridError::InvalidLabel { index: 0, value }),
        }
    }
}

impl From<Label> for i32 {
    fn from(l: Label) -> Self {
        l.code()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Free => "free",
            Label::Blocked => "blocked",
            Label::Origin => "origin",
            Label::Destination => "destination",
        };
        f.write_str(name)
    }
}
