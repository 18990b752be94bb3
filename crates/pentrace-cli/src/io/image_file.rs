// crates/pentrace-cli/src/io/image_file.rs

use anyhow::{Context, Result};
use pentrace_core::format::text;
use pentrace_core::Grid;

/// Load a hex image (one line per row, one hex digit per cell).
pub fn load_image(path: &str) -> Result<Grid> {
    let src = std::fs::read_to_string(path).with_context(|| format!("read image {path}"))?;
    let grid = text::parse_grid(&src).with_context(|| format!("parse image {path}"))?;
    Ok(grid)
}

pub fn save_image(path: &str, grid: &Grid) -> Result<()> {
    std::fs::write(path, text::format_grid(grid)).with_context(|| format!("write image {path}"))?;
    Ok(())
}
