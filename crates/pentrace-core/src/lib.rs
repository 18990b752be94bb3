pub mod error;
pub mod validate;

pub mod geom;
pub mod grid;
pub mod drawing;
pub mod encode;
pub mod format;

pub use crate::drawing::{draw, Canvas, Command, Drawing};
pub use crate::encode::{encode, EncodeParams, Encoder};
pub use crate::error::{PenError, Result};
pub use crate::geom::{Coord, Direction};
pub use crate::grid::Grid;
