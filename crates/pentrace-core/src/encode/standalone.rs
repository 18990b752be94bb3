// crates/pentrace-core/src/encode/standalone.rs
//
// Picking the next disconnected region once the pen cannot extend its current run.

use crate::encode::state::Context;
use crate::geom::{move_cost, Coord, Direction, InlineRun};

/// A chosen jump: the run to paint next and where the pen should land first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Standalone {
    pub(crate) run: InlineRun,
    pub(crate) target: Coord,
    pub(crate) cost: u32,
}

impl Context<'_> {
    /// Longest straight line through `cell`, horizontal or vertical.
    pub(crate) fn best_run(&self, cell: Coord) -> InlineRun {
        let [up, right, down, left] = self.neighbour_lengths(cell);

        let horizontal = InlineRun::new(
            Coord::new(cell.x - left as i64, cell.y),
            Coord::new(cell.x + right as i64, cell.y),
        );
        let vertical = InlineRun::new(
            Coord::new(cell.x, cell.y - up as i64),
            Coord::new(cell.x, cell.y + down as i64),
        );

        let h_len = left + right;
        let v_len = up + down;

        if h_len > v_len {
            horizontal
        } else if v_len > h_len {
            vertical
        } else {
            let h_cost = move_cost(self.cursor, self.approach_location(&horizontal));
            let v_cost = move_cost(self.cursor, self.approach_location(&vertical));
            if h_cost < v_cost {
                horizontal
            } else {
                vertical
            }
        }
    }

    /// Cell the pen should stand on so that one paint command sweeps into `run`.
    pub(crate) fn approach_location(&self, run: &InlineRun) -> Coord {
        let along: Vec<Coord> = match run.direction() {
            None => Direction::ALL.iter().map(|&d| run.from.neighbour(d)).collect(),
            Some(dir) => vec![run.from.neighbour(dir.opposite()), run.to.neighbour(dir)],
        };

        let inside: Vec<Coord> = along
            .iter()
            .copied()
            .filter(|&c| self.image.contains(c))
            .collect();
        if let Some(c) = self.cheapest(&inside) {
            return c;
        }

        // Run spans the canvas: try standing beside one of its ends instead.
        if let Some(dir) = run.direction() {
            let beside: Vec<Coord> = [run.from, run.to]
                .iter()
                .flat_map(|&end| {
                    dir.axis()
                        .perpendicular()
                        .directions()
                        .map(|d| end.neighbour(d))
                })
                .filter(|&c| self.image.contains(c) && self.best_direction(c).is_some())
                .collect();
            if let Some(c) = self.cheapest(&beside) {
                return c;
            }
        }

        // Relocation may leave the canvas; painting back in from there stays legal.
        self.cheapest(&along).unwrap_or(run.from)
    }

    /// First candidate with the lowest move cost from the pen.
    fn cheapest(&self, candidates: &[Coord]) -> Option<Coord> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| move_cost(self.cursor, c))
    }

    /// Cheapest-to-reach undrawn cell of the current color. Equal costs prefer the
    /// longer run, then the first cell in row-major order.
    pub(crate) fn nearest_standalone(&self) -> Option<Standalone> {
        let color = self.current_color()?;

        let mut best: Option<Standalone> = None;
        for (i, &px) in self.image.cells().iter().enumerate() {
            if px != color || self.drawn[i] {
                continue;
            }

            let run = self.best_run(self.image.coord_of(i));
            let target = self.approach_location(&run);
            let cost = move_cost(self.cursor, target);

            let better = match &best {
                None => true,
                Some(b) => cost < b.cost || (cost == b.cost && run.len() > b.run.len()),
            };
            if better {
                best = Some(Standalone { run, target, cost });
            }
        }
        best
    }
}
