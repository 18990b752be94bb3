use clap::Args;
use pentrace_core::encode::params::{DEFAULT_MAX_STEPS, DEFAULT_OVERRUN_CAP_PCT};
use pentrace_core::encode::{StepKind, StepView};
use pentrace_core::{EncodeParams, Encoder};
use tracing::{debug, info};

use crate::io::{drawing_file, image_file};

#[derive(Args)]
pub struct EncodeArgs {
    /// Input hex image
    #[arg(long)]
    pub r#in: String,

    /// Output drawing path (.pdr for the packed form)
    #[arg(long)]
    pub out: String,

    /// Step ceiling for the encoder; hitting it is reported as an error
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: u32,

    /// Percentage of already-drawn cells in a run above which the run is cut short
    /// (100 disables the cut)
    #[arg(long, default_value_t = DEFAULT_OVERRUN_CAP_PCT)]
    pub overrun_cap: u32,

    /// Log every encoder step (pen position, emitted commands) at debug level
    #[arg(long, default_value_t = false)]
    pub trace_steps: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let image = image_file::load_image(&args.r#in)?;

    let params = EncodeParams {
        max_steps: args.max_steps,
        overrun_cap_pct: args.overrun_cap,
    };
    let encoder = Encoder::with_params(&image, params)?;
    let background = encoder.background();

    let trace_steps = args.trace_steps;
    let encoded = encoder.compress_with(&mut |v: &StepView<'_>| {
        if !trace_steps {
            return;
        }
        match v.kind {
            StepKind::Retire { color, evicted } => {
                debug!(step = v.step, color, evicted, drawn = v.drawn_count, "retire")
            }
            _ => {
                for c in v.emitted {
                    debug!(
                        step = v.step,
                        cursor = %v.cursor,
                        commands = v.drawing.len(),
                        drawn = v.drawn_count,
                        "{c}"
                    );
                }
            }
        }
    })?;

    let bytes = drawing_file::save_drawing(&args.out, &encoded.drawing)?;

    info!(
        "encode ok: in={} {}x{} out={} bytes={} background={:x} commands={} paints={} steps={} runs={} jumps={} relocations={} retirements={} evicted={}",
        args.r#in,
        image.height(),
        image.width(),
        args.out,
        bytes,
        background,
        encoded.drawing.len(),
        encoded.drawing.paint_count(),
        encoded.stats.steps,
        encoded.stats.runs,
        encoded.stats.jumps,
        encoded.stats.relocations,
        encoded.stats.retirements,
        encoded.stats.evicted
    );

    Ok(())
}
