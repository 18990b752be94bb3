use clap::Args;
use tracing::info;

use crate::io::{drawing_file, image_file};

#[derive(Args)]
pub struct DecodeArgs {
    /// Input drawing (.pdr packed, otherwise text)
    #[arg(long)]
    pub r#in: String,

    /// Output hex image path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let drawing = drawing_file::load_drawing(&args.r#in)?;
    let grid = pentrace_core::draw(&drawing)?;

    image_file::save_image(&args.out, &grid)?;
    info!(
        "decode ok: in={} out={} {}x{} commands={}",
        args.r#in,
        args.out,
        grid.height(),
        grid.width(),
        drawing.len()
    );
    Ok(())
}
