//! Writing reports to a terminal.
//!
//! Plain output is the canvas text as-is. With colour enabled, glyphs are
//! styled by their [`Mark`] through crossterm's style commands.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use maze_render::{Canvas, Mark, render_distances, render_grid, render_path};

use crate::solve::Report;

/// Colour and attribute for a mark, or `None` to print it unstyled.
fn mark_style(mark: Mark) -> Option<(Color, Option<Attribute>)> {
    match mark {
        Mark::Blank => None,
        Mark::Frame => Some((Color::DarkGrey, None)),
        Mark::Label => Some((Color::Yellow, Some(Attribute::Bold))),
        Mark::Blocked => Some((Color::Red, Some(Attribute::Dim))),
        Mark::Distance => Some((Color::Cyan, None)),
        Mark::Node => Some((Color::Green, Some(Attribute::Bold))),
        Mark::Edge => Some((Color::Green, None)),
    }
}

/// Write one canvas, styled when `color` is set.
pub fn write_canvas<W: Write>(out: &mut W, canvas: &Canvas, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{canvas}");
    }
    for line in canvas.lines() {
        for g in line {
            match mark_style(g.mark) {
                Some((fg, attr)) => {
                    queue!(out, SetForegroundColor(fg))?;
                    if let Some(a) = attr {
                        queue!(out, SetAttribute(a))?;
                    }
                    queue!(out, Print(g.ch), SetAttribute(Attribute::Reset), ResetColor)?;
                }
                None => queue!(out, Print(g.ch))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

/// Write the full text report: maze, step map, every path, then the two
/// summary lines.
pub fn write_report<W: Write>(out: &mut W, report: &Report, color: bool) -> io::Result<()> {
    writeln!(out, "maze:")?;
    write_canvas(out, &render_grid(&report.grid), color)?;

    writeln!(out, "\nstep map:")?;
    write_canvas(out, &render_distances(&report.grid, &report.field), color)?;

    writeln!(out, "\npaths:")?;
    for path in &report.paths {
        write_canvas(out, &render_path(&report.grid, path), color)?;
        writeln!(out)?;
    }

    match report.shortest_length() {
        Some(n) => writeln!(out, "\nshortest path length: {n}")?,
        None => writeln!(out, "\nshortest path length: unreachable")?,
    }
    if report.truncated {
        writeln!(
            out,
            "number of shortest paths: {} (showing {})",
            report.total_paths,
            report.paths.len()
        )?;
    } else {
        writeln!(out, "number of shortest paths: {}", report.total_paths)?;
    }
    out.flush()
}
