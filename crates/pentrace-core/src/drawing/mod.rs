// crates/pentrace-core/src/drawing/mod.rs
//
// A drawing is a canvas header plus a pen program. Each command starts at the current
// pen position and travels `distance` cells. With a paint color it paints every cell
// it passes over, including the destination but not the starting cell; without one it
// only relocates the pen. The pen starts at (0,0), the top-left corner.

pub mod replay;

use std::fmt;

use crate::geom::Direction;

pub use replay::{draw, Canvas};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    pub direction: Direction,
    /// Always >= 1.
    pub distance: u32,
    /// None for a pen-up relocation.
    pub paint: Option<u8>,
}

impl Command {
    pub fn paint(direction: Direction, distance: u32, color: u8) -> Self {
        Self {
            direction,
            distance,
            paint: Some(color),
        }
    }

    pub fn relocate(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            distance,
            paint: None,
        }
    }

    #[inline]
    pub fn is_paint(&self) -> bool {
        self.paint.is_some()
    }
}

/// `<direction> <distance>[ <hex color>]`
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.distance)?;
        if let Some(c) = self.paint {
            write!(f, " {c:x}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawing {
    pub height: usize,
    pub width: usize,
    /// Color of every cell no command paints.
    pub background: u8,
    pub commands: Vec<Command>,
}

impl Drawing {
    /// Empty drawing of the given dimensions.
    pub fn new(height: usize, width: usize, background: u8) -> Self {
        Self {
            height,
            width,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of paint commands (the rest are relocations).
    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }
}

/// Text form: height, width, background hex digit, then one command per line.
impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.height)?;
        writeln!(f, "{}", self.width)?;
        writeln!(f, "{:x}", self.background)?;
        for c in &self.commands {
            writeln!(f, "{c}")?;
        }
        Ok(())
    }
}
