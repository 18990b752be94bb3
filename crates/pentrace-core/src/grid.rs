// crates/pentrace-core/src/grid.rs

use std::fmt;

use crate::error::{PenError, Result};
use crate::geom::Coord;

/// Number of palette entries. Colors are 0..=15.
pub const PALETTE_SIZE: usize = 16;

/// Largest canvas accepted, in cells.
pub const MAX_CELLS: usize = 1 << 28;

#[inline]
pub fn is_color(v: u8) -> bool {
    (v as usize) < PALETTE_SIZE
}

/// `height * width`, refusing canvases that overflow or exceed `MAX_CELLS`.
pub fn cell_count(height: usize, width: usize) -> Result<usize> {
    match height.checked_mul(width) {
        Some(n) if n <= MAX_CELLS => Ok(n),
        _ => Err(PenError::Validation(format!(
            "canvas {height}x{width} exceeds {MAX_CELLS} cells"
        ))),
    }
}

/// Rectangular image of 4-bit palette indices, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Solid grid of one color.
    pub fn new(height: usize, width: usize, fill: u8) -> Result<Self> {
        if !is_color(fill) {
            return Err(PenError::Validation(format!(
                "fill color {fill} out of range 0..=15"
            )));
        }
        let n = cell_count(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![fill; n],
        })
    }

    /// Build from rows of palette indices. Every row must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut cells = Vec::with_capacity(cell_count(height, width)?);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(PenError::Validation(format!(
                    "inconsistent row lengths: {} and {} on rows 0 and {}",
                    width,
                    row.len(),
                    y
                )));
            }
            if let Some(&bad) = row.iter().find(|&&v| !is_color(v)) {
                return Err(PenError::Validation(format!(
                    "color {bad} out of range 0..=15 on row {y}"
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    /// Row-major index of an in-bounds coordinate.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.width + c.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        Coord::new((idx % self.width) as i64, (idx / self.width) as i64)
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<u8> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Write one cell. Returns false (and writes nothing) when `c` is off the canvas.
    #[inline]
    pub fn set(&mut self, c: Coord, color: u8) -> bool {
        debug_assert!(is_color(color));
        match self.index(c) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size; an empty-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Pixel count per palette entry.
    pub fn histogram(&self) -> [usize; PALETTE_SIZE] {
        let mut h = [0usize; PALETTE_SIZE];
        for &c in &self.cells {
            h[c as usize] += 1;
        }
        h
    }
}

/// One hex digit per cell, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                write!(f, "{c:x}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
