use crate::drawing::Drawing;
use crate::encode::params::EncodeParams;
use crate::error::{PenError, Result};
use crate::grid::{cell_count, is_color};

pub fn validate_drawing(d: &Drawing) -> Result<()> {
    cell_count(d.height, d.width)?;

    if !is_color(d.background) {
        return Err(PenError::Validation(format!(
            "background {} out of range 0..=15",
            d.background
        )));
    }

    for (i, c) in d.commands.iter().enumerate() {
        // A zero-length command has no effect and is never emitted.
        if c.distance == 0 {
            return Err(PenError::Validation(format!(
                "command #{i}: distance must be >= 1"
            )));
        }
        if let Some(color) = c.paint {
            if !is_color(color) {
                return Err(PenError::Validation(format!(
                    "command #{i}: color {color} out of range 0..=15"
                )));
            }
        }
    }

    Ok(())
}

pub fn validate_params(p: &EncodeParams) -> Result<()> {
    // Zero steps could never emit anything for a non-trivial image.
    if p.max_steps == 0 {
        return Err(PenError::Validation("max_steps must be non-zero".into()));
    }
    if p.overrun_cap_pct == 0 || p.overrun_cap_pct > 100 {
        return Err(PenError::Validation(
            "overrun_cap_pct must be in 1..=100".into(),
        ));
    }
    Ok(())
}
