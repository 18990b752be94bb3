// crates/pentrace-core/src/geom.rs
//
// Canvas geometry shared by the encoder and the decoder.
// x grows to the right, y grows downwards, (0,0) is the top-left cell.

use std::fmt;
use std::str::FromStr;

/// A cell position. Signed so the pen may wander off the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position `k` cells away along `dir`.
    #[inline]
    pub fn offset(self, dir: Direction, k: i64) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * k,
            y: self.y + dy * k,
        }
    }

    #[inline]
    pub fn neighbour(self, dir: Direction) -> Self {
        self.offset(dir, 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The two directions travelling along this axis (backward first).
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::Left, Direction::Right],
            Axis::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Scan order. Earlier entries win ties.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Two-bit code used by the binary drawing format.
    pub(crate) fn code(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub(crate) fn from_code(code: u8) -> Direction {
        match code & 0b11 {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!(
                "bad direction {other:?} (should be up, down, left or right)"
            )),
        }
    }
}

/// Number of commands needed to relocate from `from` to `to`.
///
/// One command covers any distance along a single axis, so the price of a jump is
/// the number of axes that change (0, 1 or 2), not the distance travelled.
#[inline]
pub fn move_cost(from: Coord, to: Coord) -> u32 {
    (from.x != to.x) as u32 + (from.y != to.y) as u32
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Single,
    Horizontal,
    Vertical,
}

/// A straight line of cells between two inclusive endpoints.
///
/// Runs built by the encoder always have `from` at the left/top end, so they travel
/// Right or Down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InlineRun {
    pub from: Coord,
    pub to: Coord,
}

impl InlineRun {
    pub fn new(from: Coord, to: Coord) -> Self {
        debug_assert!(from.x == to.x || from.y == to.y, "run must be straight");
        Self { from, to }
    }

    pub fn orientation(&self) -> Orientation {
        if self.from == self.to {
            Orientation::Single
        } else if self.from.y == self.to.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn len(&self) -> u32 {
        ((self.to.x - self.from.x).abs() + (self.to.y - self.from.y).abs() + 1) as u32
    }

    /// Travel direction from `from` to `to`; None for a single cell.
    pub fn direction(&self) -> Option<Direction> {
        match self.orientation() {
            Orientation::Single => None,
            Orientation::Horizontal => Some(if self.from.x < self.to.x {
                Direction::Right
            } else {
                Direction::Left
            }),
            Orientation::Vertical => Some(if self.from.y < self.to.y {
                Direction::Down
            } else {
                Direction::Up
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cost_counts_changed_axes() {
        let c = Coord::new(3, 4);
        assert_eq!(move_cost(c, c), 0);
        assert_eq!(move_cost(c, Coord::new(3, 40)), 1);
        assert_eq!(move_cost(c, Coord::new(-7, 4)), 1);
        assert_eq!(move_cost(c, Coord::new(0, 0)), 2);
    }

    #[test]
    fn inline_run_shape() {
        let single = InlineRun::new(Coord::new(2, 2), Coord::new(2, 2));
        assert_eq!(single.orientation(), Orientation::Single);
        assert_eq!(single.len(), 1);
        assert_eq!(single.direction(), None);

        let row = InlineRun::new(Coord::new(1, 5), Coord::new(4, 5));
        assert_eq!(row.orientation(), Orientation::Horizontal);
        assert_eq!(row.len(), 4);
        assert_eq!(row.direction(), Some(Direction::Right));

        let col = InlineRun::new(Coord::new(0, 3), Coord::new(0, 1));
        assert_eq!(col.orientation(), Orientation::Vertical);
        assert_eq!(col.len(), 3);
        assert_eq!(col.direction(), Some(Direction::Up));
    }

    #[test]
    fn direction_text_and_codes() {
        for d in Direction::ALL {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
            assert_eq!(Direction::from_code(d.code()), d);
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.opposite().axis(), d.axis());
        }
        assert!("north".parse::<Direction>().is_err());
    }
}
