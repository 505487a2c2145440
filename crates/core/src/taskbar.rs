use crate::error::TaskbarError;
use crate::feature::{Feature, FeatureSet};
use crate::image::BadgeImage;
use crate::menu::TaskbarMenu;
use crate::progress::{ProgressState, ProgressValue};

/// Opaque native window identifier for per-window operations.
///
/// [`WindowHandle::MAIN`] asks the backend to resolve the application's main
/// window itself, so frontends never need raw-window-handle plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// The application's main window, resolved by the backend.
    pub const MAIN: WindowHandle = WindowHandle(0);

    pub fn new(raw: u64) -> Self {
        WindowHandle(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by platform taskbar backends.
///
/// Callers must not invoke an operation whose [`Feature`] the backend does
/// not advertise; backends answer such calls with
/// [`TaskbarError::Unsupported`].
pub trait Taskbar: Send + Sync {
    fn name(&self) -> &'static str;

    /// Capabilities this backend advertises on the current host.
    fn features(&self) -> FeatureSet;

    fn is_supported(&self, feature: Feature) -> bool {
        self.features().supports(feature)
    }

    /// Whether the backend is usable at all on this host. Backends with no
    /// advertised capability are skipped during acquisition.
    fn available(&self) -> bool {
        !self.features().is_empty()
    }

    /// Acquisition preference among available backends; highest wins. The
    /// mock backend uses a high priority so it shadows native backends in
    /// tests and development builds.
    fn priority(&self) -> i32 {
        0
    }

    /// Sets the badge on the application's taskbar icon. Numeric badges are
    /// formatted to text by the caller.
    fn set_badge_text(&self, text: &str) -> Result<(), TaskbarError>;

    fn set_window_badge_image(
        &self,
        window: WindowHandle,
        image: &BadgeImage,
    ) -> Result<(), TaskbarError>;

    fn set_icon_image(&self, image: &BadgeImage) -> Result<(), TaskbarError>;

    fn set_menu(&self, menu: &TaskbarMenu) -> Result<(), TaskbarError>;

    fn set_window_progress_state(
        &self,
        window: WindowHandle,
        state: ProgressState,
    ) -> Result<(), TaskbarError>;

    fn set_progress_value(&self, value: ProgressValue) -> Result<(), TaskbarError>;

    fn set_window_progress_value(
        &self,
        window: WindowHandle,
        value: ProgressValue,
    ) -> Result<(), TaskbarError>;

    fn request_user_attention(&self, enabled: bool, critical: bool) -> Result<(), TaskbarError>;

    fn request_window_user_attention(&self, window: WindowHandle) -> Result<(), TaskbarError>;
}
