use crate::error::TaskbarError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Taskbar progress indicator state.
///
/// Declaration order is the order progress-state selectors present the
/// choices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressState {
    Off,
    Normal,
    Paused,
    Error,
    Indeterminate,
}

impl ProgressState {
    /// Every progress state, in declaration order.
    pub const ALL: [ProgressState; 5] = [
        ProgressState::Off,
        ProgressState::Normal,
        ProgressState::Paused,
        ProgressState::Error,
        ProgressState::Indeterminate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressState::Off => "Off",
            ProgressState::Normal => "Normal",
            ProgressState::Paused => "Paused",
            ProgressState::Error => "Error",
            ProgressState::Indeterminate => "Indeterminate",
        }
    }
}

impl Display for ProgressState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion percentage in `0..=100`.
///
/// Construction validates the range, so backends can rely on the bound and
/// widgets can expose the raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ProgressValue(u8);

impl ProgressValue {
    pub const MIN: ProgressValue = ProgressValue(0);
    pub const MAX: ProgressValue = ProgressValue(100);

    pub fn new(value: u8) -> Result<Self, TaskbarError> {
        if value > 100 {
            return Err(TaskbarError::ProgressOutOfRange(value));
        }
        Ok(ProgressValue(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Display for ProgressValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
