// crates/pentrace-core/src/encode/stats.rs

/// Counters collected over one encoder run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub steps: u32,
    /// Paint commands emitted by run extension.
    pub runs: u32,
    /// Steps that jumped to a standalone region (one or two relocation commands).
    pub jumps: u32,
    pub relocations: u32,
    pub retirements: u32,
    /// Cells dropped from the drawn set by cleanup passes.
    pub evicted: u64,
}
