use anyhow::bail;
use clap::Args;
use pentrace_core::encode::params::{DEFAULT_MAX_STEPS, DEFAULT_OVERRUN_CAP_PCT};
use pentrace_core::{EncodeParams, Encoder};
use tracing::info;

use crate::io::image_file;

#[derive(Args)]
pub struct VerifyArgs {
    /// Input hex image(s)
    #[arg(long = "in", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: u32,

    #[arg(long, default_value_t = DEFAULT_OVERRUN_CAP_PCT)]
    pub overrun_cap: u32,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let params = EncodeParams {
        max_steps: args.max_steps,
        overrun_cap_pct: args.overrun_cap,
    };

    let mut total = 0usize;
    let mut failed = Vec::new();

    for path in &args.inputs {
        let image = image_file::load_image(path)?;
        let drawing = Encoder::with_params(&image, params)?.compress()?;
        let back = pentrace_core::draw(&drawing)?;

        let ok = back == image;
        total += drawing.len();
        println!("{path}\tcommands={}\troundtrip={}", drawing.len(), if ok { "ok" } else { "MISMATCH" });
        if !ok {
            failed.push(path.as_str());
        }
    }

    info!("verify: files={} total_commands={}", args.inputs.len(), total);

    if !failed.is_empty() {
        bail!("round trip mismatch: {}", failed.join(", "));
    }
    Ok(())
}
