use crate::feature::Feature;
use thiserror::Error;

/// Errors surfaced by taskbar backends.
///
/// Callers that drive a UI treat these as best-effort failures: an action
/// logs the error and completes, it never aborts the interaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskbarError {
    #[error("taskbar feature {0} is not supported by this backend")]
    Unsupported(Feature),

    #[error("progress value {0} is out of range (expected 0..=100)")]
    ProgressOutOfRange(u8),

    #[error("badge image buffer has {actual} bytes, expected {expected} for the given dimensions")]
    InvalidImage { expected: usize, actual: usize },

    #[error("platform call failed: {0}")]
    Platform(String),
}

impl TaskbarError {
    /// Wraps a backend-specific failure message.
    pub fn platform(message: impl Into<String>) -> Self {
        TaskbarError::Platform(message.into())
    }
}
