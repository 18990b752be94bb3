// crates/pentrace-core/src/encode/mod.rs
//
// Greedy pen-program encoder.
//
// Colors are processed one at a time, most frequent first; the most frequent color of
// all is the background and never painted. Each step does exactly one of:
//   1. extend: paint the longest useful straight run reachable from the pen,
//   2. jump:   lift the pen and move next to the cheapest unpainted region,
//   3. retire: the current color is complete, move on to the next one.
// Runs may cross cells of colors still waiting for their turn. Those cells are
// repainted later, so the drawn set only trusts cells of the current color and of
// colors already retired.

pub mod params;
pub mod stats;

mod scan;
mod standalone;
mod state;

use tracing::{debug, trace, warn};

use crate::drawing::{Command, Drawing};
use crate::error::{PenError, Result};
use crate::geom::{Coord, Direction};
use crate::grid::Grid;
use crate::validate::validate_params;

pub use params::EncodeParams;
pub use state::{choose_background, color_order};
pub use stats::EncodeStats;

use state::Context;

/// What a single encoder step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Painted a run from the pen position.
    Extend { direction: Direction, length: u32 },
    /// Relocated the pen to the approach cell of a standalone region.
    Jump { target: Coord },
    /// All cells of `color` are final; `evicted` untrusted cells left the drawn set.
    Retire { color: u8, evicted: usize },
}

/// Read-only view of the encoder after a committed step.
#[derive(Debug)]
pub struct StepView<'a> {
    /// 1-based step number.
    pub step: u32,
    pub kind: StepKind,
    pub cursor: Coord,
    pub current_color: Option<u8>,
    /// Commands appended by this step (empty for a retirement).
    pub emitted: &'a [Command],
    /// The drawing so far.
    pub drawing: &'a Drawing,
    pub image: &'a Grid,
    /// Drawn flag per cell, row-major.
    pub drawn: &'a [bool],
    pub drawn_count: usize,
}

/// Called after every committed step. Observers cannot pause or steer the encoder.
pub trait EncodeObserver {
    fn on_step(&mut self, view: &StepView<'_>);
}

impl<F> EncodeObserver for F
where
    F: FnMut(&StepView<'_>),
{
    fn on_step(&mut self, view: &StepView<'_>) {
        self(view)
    }
}

/// Output of an observed encoder run.
#[derive(Clone, Debug)]
pub struct Encoded {
    pub drawing: Drawing,
    pub stats: EncodeStats,
}

pub struct Encoder<'a> {
    ctx: Context<'a>,
}

impl<'a> Encoder<'a> {
    pub fn new(image: &'a Grid) -> Result<Self> {
        Self::with_params(image, EncodeParams::default())
    }

    pub fn with_params(image: &'a Grid, params: EncodeParams) -> Result<Self> {
        validate_params(&params)?;
        Ok(Self {
            ctx: Context::new(image, params),
        })
    }

    pub fn background(&self) -> u8 {
        self.ctx.background
    }

    /// Non-background colors in processing order.
    pub fn color_order(&self) -> &[u8] {
        &self.ctx.order
    }

    pub fn compress(self) -> Result<Drawing> {
        self.compress_with(&mut |_: &StepView<'_>| {})
            .map(|e| e.drawing)
    }

    pub fn compress_with<O>(mut self, observer: &mut O) -> Result<Encoded>
    where
        O: EncodeObserver + ?Sized,
    {
        let max_steps = self.ctx.params.max_steps;
        let mut steps: u32 = 0;

        while !self.ctx.is_done() {
            if steps >= max_steps {
                warn!(steps, commands = self.ctx.drawing.len(), "encoder hit step ceiling");
                return Err(PenError::StepLimit { steps });
            }

            let before = self.ctx.drawing.len();
            let Some(kind) = self.step() else {
                warn!(steps, "encoder has no legal move and no color to retire");
                return Err(PenError::StepLimit { steps });
            };
            steps += 1;
            self.ctx.stats.steps = steps;

            trace!(step = steps, ?kind, cursor = %self.ctx.cursor, "step");

            let view = StepView {
                step: steps,
                kind,
                cursor: self.ctx.cursor,
                current_color: self.ctx.current_color(),
                emitted: &self.ctx.drawing.commands[before..],
                drawing: &self.ctx.drawing,
                image: self.ctx.image,
                drawn: &self.ctx.drawn,
                drawn_count: self.ctx.drawn_count,
            };
            observer.on_step(&view);
        }

        self.ctx.cleanup();

        debug!(
            steps,
            commands = self.ctx.drawing.len(),
            background = self.ctx.background,
            colors = self.ctx.order.len(),
            "encode complete"
        );

        Ok(Encoded {
            drawing: self.ctx.drawing,
            stats: self.ctx.stats,
        })
    }

    fn step(&mut self) -> Option<StepKind> {
        let ctx = &mut self.ctx;

        if let Some((direction, length)) = ctx.best_direction(ctx.cursor) {
            let color = ctx.current_color()?;
            ctx.emit(Command::paint(direction, length, color));
            return Some(StepKind::Extend { direction, length });
        }

        if let Some(jump) = ctx.nearest_standalone() {
            let dx = jump.target.x - ctx.cursor.x;
            let dy = jump.target.y - ctx.cursor.y;
            if dx != 0 {
                let dir = if dx < 0 { Direction::Left } else { Direction::Right };
                ctx.emit(Command::relocate(dir, dx.unsigned_abs() as u32));
            }
            if dy != 0 {
                let dir = if dy < 0 { Direction::Up } else { Direction::Down };
                ctx.emit(Command::relocate(dir, dy.unsigned_abs() as u32));
            }
            ctx.stats.jumps += 1;
            return Some(StepKind::Jump {
                target: jump.target,
            });
        }

        let (color, evicted) = ctx.retire_current()?;
        debug!(color, evicted, next = ?ctx.current_color(), "retired color");
        Some(StepKind::Retire { color, evicted })
    }
}

/// Encode with default parameters.
pub fn encode(image: &Grid) -> Result<Drawing> {
    Encoder::new(image)?.compress()
}

pub fn encode_with_params(image: &Grid, params: EncodeParams) -> Result<Drawing> {
    Encoder::with_params(image, params)?.compress()
}
