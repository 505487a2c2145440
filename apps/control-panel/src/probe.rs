//! Startup capability probe.

use dockpilot_core::{Feature, Taskbar};
use serde::Serialize;
use std::fmt::Write;

/// Notice printed when no backend is available. The process exits right
/// after; no degraded partial UI is offered.
pub const UNSUPPORTED_NOTICE: &str = "Taskbar integration is not supported on this platform.";

/// Snapshot of the acquired backend and its supported capability subset,
/// in [`Feature`] declaration order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProbeReport {
    backend: String,
    supported: Vec<Feature>,
}

impl ProbeReport {
    pub fn capture(taskbar: &dyn Taskbar) -> Self {
        ProbeReport {
            backend: taskbar.name().to_owned(),
            supported: taskbar.features().iter_features().collect(),
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn supported(&self) -> &[Feature] {
        &self.supported
    }

    pub fn render_text(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(&mut output, "Backend: {}", self.backend);
        if self.supported.is_empty() {
            let _ = writeln!(&mut output, "Supported taskbar features: none");
        } else {
            let _ = writeln!(&mut output, "Supported taskbar features:");
            for feature in &self.supported {
                let _ = writeln!(&mut output, "  - {feature}");
            }
        }
        output.trim_end().to_owned()
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
