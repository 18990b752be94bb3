// crates/pentrace-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "pentrace")]
#[command(about = "Pen-program codec for 16-color raster images", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a hex image into a drawing (.pdr = packed, anything else = text)
    Encode(cmd::encode::EncodeArgs),

    /// Replay a drawing back into a hex image
    Decode(cmd::decode::DecodeArgs),

    /// Encode + decode an image in memory and check the round trip
    Verify(cmd::verify::VerifyArgs),

    /// Inspect a drawing (header, command mix, drawing id, replay check)
    Inspect(cmd::inspect::InspectArgs),

    /// Analyze an image (color histogram, runs, zstd scoreboard)
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    }
}
