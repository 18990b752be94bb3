// crates/pentrace-core/src/encode/state.rs
//
// Mutable encoder context: pen position, drawn set, color schedule and the drawing
// being built. Owned by one Encoder for the duration of a compress() call.

use crate::drawing::{Command, Drawing};
use crate::encode::params::EncodeParams;
use crate::encode::stats::EncodeStats;
use crate::geom::Coord;
use crate::grid::{Grid, PALETTE_SIZE};

/// Most frequent color; the lowest index wins a tie. An empty grid yields 0.
pub fn choose_background(hist: &[usize; PALETTE_SIZE]) -> u8 {
    let mut best = 0usize;
    for c in 1..PALETTE_SIZE {
        if hist[c] > hist[best] {
            best = c;
        }
    }
    best as u8
}

/// Colors present in the image other than `background`, most frequent first,
/// lower index first on equal counts.
pub fn color_order(hist: &[usize; PALETTE_SIZE], background: u8) -> Vec<u8> {
    let mut colors: Vec<u8> = (0..PALETTE_SIZE as u8)
        .filter(|&c| c != background && hist[c as usize] > 0)
        .collect();
    colors.sort_by(|a, b| {
        hist[*b as usize]
            .cmp(&hist[*a as usize])
            .then_with(|| a.cmp(b))
    });
    colors
}

pub(crate) struct Context<'a> {
    pub(crate) image: &'a Grid,
    pub(crate) params: EncodeParams,
    pub(crate) background: u8,
    pub(crate) order: Vec<u8>,
    /// Index into `order`; equals `order.len()` once every color is retired.
    pub(crate) current: usize,
    /// Colors whose cells are final. Runs never cross them. Includes the background.
    pub(crate) retired: [bool; PALETTE_SIZE],
    pub(crate) drawn: Vec<bool>,
    pub(crate) drawn_count: usize,
    pub(crate) cursor: Coord,
    pub(crate) drawing: Drawing,
    pub(crate) stats: EncodeStats,
}

impl<'a> Context<'a> {
    pub(crate) fn new(image: &'a Grid, params: EncodeParams) -> Self {
        let hist = image.histogram();
        let background = choose_background(&hist);
        let order = color_order(&hist, background);

        let mut retired = [false; PALETTE_SIZE];
        retired[background as usize] = true;

        Self {
            image,
            params,
            background,
            order,
            current: 0,
            retired,
            drawn: vec![false; image.len()],
            drawn_count: 0,
            cursor: Coord::ORIGIN,
            drawing: Drawing::new(image.height(), image.width(), background),
            stats: EncodeStats::default(),
        }
    }

    #[inline]
    pub(crate) fn current_color(&self) -> Option<u8> {
        self.order.get(self.current).copied()
    }

    #[inline]
    pub(crate) fn is_drawn(&self, c: Coord) -> bool {
        self.image.index(c).is_some_and(|i| self.drawn[i])
    }

    /// A drawn cell is only believed correct once its own color is current or retired.
    #[inline]
    fn is_trusted(&self, color: u8) -> bool {
        self.retired[color as usize] || self.current_color() == Some(color)
    }

    /// Every non-background cell is drawn with a color we can trust.
    pub(crate) fn is_done(&self) -> bool {
        self.image
            .cells()
            .iter()
            .zip(&self.drawn)
            .all(|(&px, &drawn)| px == self.background || (drawn && self.is_trusted(px)))
    }

    /// Append a command and move the pen; painted cells join the drawn set.
    pub(crate) fn emit(&mut self, cmd: Command) {
        if cmd.is_paint() {
            for k in 1..=cmd.distance as i64 {
                let c = self.cursor.offset(cmd.direction, k);
                if let Some(i) = self.image.index(c) {
                    debug_assert_ne!(self.image.cells()[i], self.background);
                    if !self.drawn[i] {
                        self.drawn[i] = true;
                        self.drawn_count += 1;
                    }
                }
            }
            self.stats.runs += 1;
        } else {
            self.stats.relocations += 1;
        }

        self.cursor = self.cursor.offset(cmd.direction, cmd.distance as i64);
        self.drawing.push(cmd);
    }

    /// Forget drawn cells painted over while servicing another color. Returns how many
    /// cells were dropped.
    pub(crate) fn cleanup(&mut self) -> usize {
        let mut evicted = 0usize;
        for i in 0..self.drawn.len() {
            if self.drawn[i] && !self.is_trusted(self.image.cells()[i]) {
                self.drawn[i] = false;
                evicted += 1;
            }
        }
        self.drawn_count -= evicted;
        self.stats.evicted += evicted as u64;
        evicted
    }

    /// Clean up and move on to the next color. Returns the retired color and the number
    /// of evicted cells, or None when every color is already retired.
    pub(crate) fn retire_current(&mut self) -> Option<(u8, usize)> {
        let color = self.current_color()?;
        let evicted = self.cleanup();
        self.retired[color as usize] = true;
        self.current += 1;
        self.stats.retirements += 1;
        Some((color, evicted))
    }
}
