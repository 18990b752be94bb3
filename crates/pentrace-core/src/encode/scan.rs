// crates/pentrace-core/src/encode/scan.rs
//
// Straight-run measurement from a pen position.

use crate::encode::state::Context;
use crate::geom::{Coord, Direction};

impl Context<'_> {
    /// Length of the paint run starting one cell past `origin` along `dir`.
    ///
    /// The pen keeps going over cells of colors not processed yet (they get repainted
    /// on their own turn) and stops at the canvas edge, the background, or a retired
    /// color. A span without any undrawn cell of the current color is worth 0.
    pub(crate) fn run_length(&self, origin: Coord, dir: Direction) -> u32 {
        let Some(color) = self.current_color() else {
            return 0;
        };

        let mut len: u32 = 0;
        let mut drawn_in_span: u32 = 0;
        let mut last_undrawn: u32 = 0;
        let mut wants_paint = false;

        loop {
            let c = origin.offset(dir, len as i64 + 1);
            let Some(px) = self.image.get(c) else {
                break;
            };
            // the background is always retired
            if self.retired[px as usize] {
                break;
            }

            len += 1;
            if self.is_drawn(c) {
                drawn_in_span += 1;
            } else {
                last_undrawn = len;
                if px == color {
                    wants_paint = true;
                }
            }
        }

        if !wants_paint {
            return 0;
        }

        // Overrun guard: mostly repainting finished cells, stop after the last new one.
        // last_undrawn is at or past the undrawn current-color cell, so the cut run
        // still does useful work.
        if drawn_in_span as u64 * 100 > self.params.overrun_cap_pct as u64 * len as u64 {
            return last_undrawn;
        }

        len
    }

    /// Run lengths in `Direction::ALL` order.
    pub(crate) fn neighbour_lengths(&self, origin: Coord) -> [u32; 4] {
        Direction::ALL.map(|d| self.run_length(origin, d))
    }

    /// Longest positive run from `origin`; the first direction of `Direction::ALL`
    /// wins a tie.
    pub(crate) fn best_direction(&self, origin: Coord) -> Option<(Direction, u32)> {
        let lengths = self.neighbour_lengths(origin);

        let mut best: Option<(Direction, u32)> = None;
        for (dir, len) in Direction::ALL.into_iter().zip(lengths) {
            if len > best.map_or(0, |(_, l)| l) {
                best = Some((dir, len));
            }
        }
        best
    }
}
