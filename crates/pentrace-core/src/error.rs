use thiserror::Error;

pub type Result<T> = std::result::Result<T, PenError>;

#[derive(Debug, Error)]
pub enum PenError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("drawing format error: {0}")]
    Format(String),

    /// A paint command tried to write a cell outside the canvas.
    #[error("command #{command_index} paints outside the canvas at ({x},{y})")]
    OutOfCanvasPaint { command_index: usize, x: i64, y: i64 },

    /// The encoder reached its step ceiling without covering the image.
    #[error("encoder did not converge after {steps} steps")]
    StepLimit { steps: u32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PenError {
    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        PenError::Parse {
            line,
            msg: msg.into(),
        }
    }
}
