// crates/pentrace-core/src/format/text.rs
//
// Line-oriented text forms.
//
// Image:   one line per row, one hex digit per cell.
// Drawing: height, width and background (one hex digit) on the first three lines,
//          then one command per line: `<direction> <distance>[ <hex color>]`,
//          e.g. `left 10 3`, `up 1`, `up 2 c`.
//
// Line numbers in errors are 1-based.

use crate::drawing::{Command, Drawing};
use crate::error::{PenError, Result};
use crate::geom::Direction;
use crate::grid::{is_color, Grid};

pub fn parse_grid(src: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (i, line) in src.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            let v = ch
                .to_digit(16)
                .ok_or_else(|| PenError::parse(i + 1, format!("invalid contents: {ch:?}")))?;
            row.push(v as u8);
        }

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(PenError::parse(
                    i + 1,
                    format!(
                        "inconsistent line lengths: {} and {} on lines 1 and {}",
                        first.len(),
                        row.len(),
                        i + 1
                    ),
                ));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() || rows[0].is_empty() {
        return Err(PenError::parse(1, "empty image"));
    }

    Grid::from_rows(&rows)
}

pub fn format_grid(grid: &Grid) -> String {
    grid.to_string()
}

fn parse_color(s: &str, line: usize) -> Result<u8> {
    match u8::from_str_radix(s, 16) {
        Ok(v) if is_color(v) => Ok(v),
        _ => Err(PenError::parse(
            line,
            format!("bad colour {s:?} (should be a hex number between 0 and f)"),
        )),
    }
}

/// Parse one command line.
pub fn parse_command(s: &str, line: usize) -> Result<Command> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(PenError::parse(
            line,
            format!("bad command (should have 2 or 3 parts): {s:?}"),
        ));
    }

    let direction: Direction = fields[0]
        .parse()
        .map_err(|e: String| PenError::parse(line, e))?;

    let distance: u32 = fields[1].parse().map_err(|_| {
        PenError::parse(
            line,
            format!("bad distance (should be a number): {:?}", fields[1]),
        )
    })?;
    if distance == 0 {
        return Err(PenError::parse(line, "bad distance (should be at least 1)"));
    }

    let paint = match fields.get(2) {
        Some(c) => Some(parse_color(c, line)?),
        None => None,
    };

    Ok(Command {
        direction,
        distance,
        paint,
    })
}

/// Next header line; `expected` is the 1-based line it should sit on.
fn header_line<'s>(
    lines: &mut impl Iterator<Item = (usize, &'s str)>,
    expected: usize,
    what: &str,
) -> Result<(usize, &'s str)> {
    match lines.next() {
        Some((i, l)) => Ok((i + 1, l.trim())),
        None => Err(PenError::parse(expected, format!("missing {what} line"))),
    }
}

pub fn parse_drawing(src: &str) -> Result<Drawing> {
    let mut lines = src.lines().map(|l| l.trim_end_matches('\r')).enumerate();

    let (n, s) = header_line(&mut lines, 1, "height")?;
    let height: usize = s
        .parse()
        .map_err(|_| PenError::parse(n, format!("expected the height on line 1: {s:?}")))?;

    let (n, s) = header_line(&mut lines, 2, "width")?;
    let width: usize = s
        .parse()
        .map_err(|_| PenError::parse(n, format!("expected the width on line 2: {s:?}")))?;

    let (n, s) = header_line(&mut lines, 3, "background")?;
    let background = parse_color(s, n)?;

    let mut drawing = Drawing::new(height, width, background);
    for (i, l) in lines {
        drawing.push(parse_command(l, i + 1)?);
    }
    Ok(drawing)
}

pub fn format_drawing(drawing: &Drawing) -> String {
    drawing.to_string()
}
