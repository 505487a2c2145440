//! Linux taskbar backend for DockPilot.
//!
//! Speaks the Unity LauncherEntry protocol: state changes are broadcast as
//! `com.canonical.Unity.LauncherEntry.Update` signals on the session bus,
//! which Plasma, Cinnamon, Docky-style docks and Unity itself pick up. The
//! protocol carries a numeric badge (`count`), a completion fraction
//! (`progress`) and an `urgent` flag, so exactly those three capabilities
//! are advertised.

#![cfg(target_os = "linux")]

mod launcher_entry;

use dockpilot_core::{
    BadgeImage, Feature, FeatureSet, ProgressState, ProgressValue, Taskbar, TaskbarError,
    TaskbarMenu, WindowHandle, register_taskbar,
};
use launcher_entry::LauncherEntry;
use once_cell::sync::OnceCell;

static LINUX_TASKBAR: LinuxTaskbar = LinuxTaskbar { entry: OnceCell::new() };

register_taskbar!(&LINUX_TASKBAR);

struct LinuxTaskbar {
    /// Lazily established launcher entry; `None` once probing the session
    /// bus has failed, so the backend reports itself unavailable.
    entry: OnceCell<Option<LauncherEntry>>,
}

impl LinuxTaskbar {
    fn entry(&self) -> Option<&LauncherEntry> {
        self.entry
            .get_or_init(|| match LauncherEntry::connect() {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::debug!(%error, "session bus unavailable, taskbar backend disabled");
                    None
                }
            })
            .as_ref()
    }

    fn with_entry(
        &self,
        feature: Feature,
        apply: impl FnOnce(&LauncherEntry) -> Result<(), TaskbarError>,
    ) -> Result<(), TaskbarError> {
        match self.entry() {
            Some(entry) => apply(entry),
            None => Err(TaskbarError::Unsupported(feature)),
        }
    }
}

impl Taskbar for LinuxTaskbar {
    fn name(&self) -> &'static str {
        "Unity LauncherEntry"
    }

    fn features(&self) -> FeatureSet {
        if self.entry().is_some() {
            FeatureSet::ICON_BADGE_NUMBER | FeatureSet::PROGRESS_VALUE | FeatureSet::USER_ATTENTION
        } else {
            FeatureSet::empty()
        }
    }

    fn set_badge_text(&self, text: &str) -> Result<(), TaskbarError> {
        // The protocol only knows numeric badges. Anything unparsable hides
        // the count instead of failing the action.
        self.with_entry(Feature::IconBadgeNumber, |entry| match text.trim().parse::<i64>() {
            Ok(count) => entry.set_count(Some(count)),
            Err(_) => entry.set_count(None),
        })
    }

    fn set_window_badge_image(
        &self,
        _window: WindowHandle,
        _image: &BadgeImage,
    ) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::IconBadgeImageWindow))
    }

    fn set_icon_image(&self, _image: &BadgeImage) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::IconImage))
    }

    fn set_menu(&self, _menu: &TaskbarMenu) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::Menu))
    }

    fn set_window_progress_state(
        &self,
        _window: WindowHandle,
        _state: ProgressState,
    ) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::ProgressStateWindow))
    }

    fn set_progress_value(&self, value: ProgressValue) -> Result<(), TaskbarError> {
        self.with_entry(Feature::ProgressValue, |entry| entry.set_progress(value))
    }

    fn set_window_progress_value(
        &self,
        _window: WindowHandle,
        _value: ProgressValue,
    ) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::ProgressValueWindow))
    }

    fn request_user_attention(&self, enabled: bool, _critical: bool) -> Result<(), TaskbarError> {
        // The protocol has a single urgency bit; "critical" has no separate
        // representation here.
        self.with_entry(Feature::UserAttention, |entry| entry.set_urgent(enabled))
    }

    fn request_window_user_attention(&self, _window: WindowHandle) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::UserAttentionWindow))
    }
}
