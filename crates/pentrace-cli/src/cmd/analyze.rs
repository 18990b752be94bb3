use clap::Args;
use pentrace_core::encode::{choose_background, color_order};
use pentrace_core::format::text;
use pentrace_core::Grid;
use std::io::Cursor;

use crate::io::image_file;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input hex image
    #[arg(long)]
    pub r#in: String,

    /// Skip encoding the image and the zstd size comparison
    #[arg(long, default_value_t = false)]
    pub no_encode: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let image = image_file::load_image(&args.r#in)?;
    let n = image.len();

    let hist = image.histogram();
    let background = choose_background(&hist);
    let order = color_order(&hist, background);
    let (h_runs, v_runs) = run_counts(&image);

    println!("--- analyze ---");
    println!("file            = {}", args.r#in);
    println!("size            = {}x{} ({} cells)", image.height(), image.width(), n);
    println!("background      = {:x}", background);
    println!("colors          = {}", order.len() + 1);
    println!("row_runs        = {}", h_runs);
    println!("column_runs     = {}", v_runs);

    println!("--- colors (processing order) ---");
    for c in std::iter::once(background).chain(order.iter().copied()) {
        let count = hist[c as usize];
        let pct = if n == 0 { 0.0 } else { count as f64 * 100.0 / n as f64 };
        let tag = if c == background { " (background)" } else { "" };
        println!("color={:x} count={} ({:.2}%){}", c, count, pct, tag);
    }

    if !args.no_encode {
        let drawing = pentrace_core::encode(&image)?;
        let image_text = text::format_grid(&image);
        let drawing_text = text::format_drawing(&drawing);

        let z_image = zstd_size(image_text.as_bytes(), args.zstd_level)?;
        let z_drawing = zstd_size(drawing_text.as_bytes(), args.zstd_level)?;

        println!("--- scoreboard ---");
        println!("commands        = {}", drawing.len());
        println!("image_text      = {}", image_text.len());
        println!("drawing_text    = {}", drawing_text.len());
        println!("zstd_level      = {}", args.zstd_level);
        println!("zstd(image)     = {}", z_image);
        println!("zstd(drawing)   = {}", z_drawing);
    }

    Ok(())
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}

/// Maximal same-color runs along rows and along columns (background included).
fn run_counts(g: &Grid) -> (usize, usize) {
    let (h, w) = (g.height(), g.width());
    let cells = g.cells();

    let mut rows = 0usize;
    for y in 0..h {
        for x in 0..w {
            if x == 0 || cells[y * w + x] != cells[y * w + x - 1] {
                rows += 1;
            }
        }
    }

    let mut cols = 0usize;
    for x in 0..w {
        for y in 0..h {
            if y == 0 || cells[y * w + x] != cells[(y - 1) * w + x] {
                cols += 1;
            }
        }
    }

    (rows, cols)
}
