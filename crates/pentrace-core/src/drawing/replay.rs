// crates/pentrace-core/src/drawing/replay.rs

use crate::drawing::{Command, Drawing};
use crate::error::{PenError, Result};
use crate::geom::Coord;
use crate::grid::Grid;
use crate::validate::validate_drawing;

/// Replay a drawing onto a fresh canvas.
///
/// Fails on the first paint that leaves the canvas; no partial grid escapes.
pub fn draw(drawing: &Drawing) -> Result<Grid> {
    validate_drawing(drawing)?;

    let mut canvas = Canvas::new(drawing.height, drawing.width, drawing.background)?;
    for (i, cmd) in drawing.commands.iter().enumerate() {
        canvas.apply(i, cmd)?;
    }
    Ok(canvas.into_grid())
}

/// Incremental replay state: the grid painted so far plus the pen position.
#[derive(Clone, Debug)]
pub struct Canvas {
    grid: Grid,
    cursor: Coord,
}

impl Canvas {
    pub fn new(height: usize, width: usize, background: u8) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(height, width, background)?,
            cursor: Coord::ORIGIN,
        })
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Apply one command. `index` is only used to report errors.
    ///
    /// On error the pen stays where it was; cells already painted by this command
    /// are not rolled back.
    pub fn apply(&mut self, index: usize, cmd: &Command) -> Result<()> {
        let distance = cmd.distance as i64;

        if let Some(color) = cmd.paint {
            for k in 1..=distance {
                let c = self.cursor.offset(cmd.direction, k);
                if !self.grid.set(c, color) {
                    return Err(PenError::OutOfCanvasPaint {
                        command_index: index,
                        x: c.x,
                        y: c.y,
                    });
                }
            }
        }

        self.cursor = self.cursor.offset(cmd.direction, distance);
        Ok(())
    }
}
