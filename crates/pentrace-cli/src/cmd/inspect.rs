use clap::Args;
use pentrace_core::format::binary;
use pentrace_core::Direction;

use crate::io::drawing_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input drawing (.pdr packed, otherwise text)
    #[arg(long)]
    pub r#in: String,

    /// Skip replaying the drawing (the replay reports whether it stays on the canvas)
    #[arg(long, default_value_t = false)]
    pub no_replay: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let d = drawing_file::load_drawing(&args.r#in)?;
    let id = binary::drawing_id_hex(&d)?;

    let paints = d.paint_count();
    let mut per_dir = [0usize; 4];
    let mut travelled = 0u64;
    for c in &d.commands {
        let k = Direction::ALL.iter().position(|&x| x == c.direction).unwrap_or(0);
        per_dir[k] += 1;
        travelled += c.distance as u64;
    }

    println!("--- inspect ---");
    println!("file         = {}", args.r#in);
    println!("format       = {}", if drawing_file::is_packed(&args.r#in) { "packed" } else { "text" });
    println!("drawing_id   = {}", id);
    println!("height       = {}", d.height);
    println!("width        = {}", d.width);
    println!("background   = {:x}", d.background);
    println!("commands     = {}", d.len());
    println!("paints       = {}", paints);
    println!("relocations  = {}", d.len() - paints);
    println!("travelled    = {}", travelled);
    for (dir, n) in Direction::ALL.iter().zip(per_dir) {
        println!("dir.{:<8}= {}", dir.as_str(), n);
    }

    let mut colors = [0usize; 16];
    for c in d.commands.iter().filter_map(|c| c.paint) {
        colors[c as usize] += 1;
    }
    for (c, n) in colors.iter().enumerate().filter(|(_, n)| **n > 0) {
        println!("paint[{:x}]     = {}", c, n);
    }

    if !args.no_replay {
        match pentrace_core::draw(&d) {
            Ok(_) => println!("replay       = ok"),
            Err(e) => println!("replay       = FAILED ({e})"),
        }
    }

    Ok(())
}
