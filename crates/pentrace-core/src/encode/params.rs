// crates/pentrace-core/src/encode/params.rs

/// Encoder tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeParams {
    /// Hard ceiling on state-machine steps. Reaching it is an encoder defect.
    pub max_steps: u32,
    /// When more than this percentage of a scanned run is already drawn, the run is
    /// cut back to its last undrawn cell. 100 disables the cut.
    pub overrun_cap_pct: u32,
}

pub const DEFAULT_MAX_STEPS: u32 = 10_000;
pub const DEFAULT_OVERRUN_CAP_PCT: u32 = 70;

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            overrun_cap_pct: DEFAULT_OVERRUN_CAP_PCT,
        }
    }
}
