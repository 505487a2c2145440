use crate::taskbar::Taskbar;

/// Inventory entry submitted by platform crates via [`register_taskbar!`].
pub struct TaskbarRegistration {
    pub taskbar: &'static dyn Taskbar,
}

inventory::collect!(TaskbarRegistration);

/// Iterates every linked backend, available or not.
pub fn taskbars() -> impl Iterator<Item = &'static dyn Taskbar> {
    inventory::iter::<TaskbarRegistration>.into_iter().map(|entry| entry.taskbar)
}

/// Picks the available backend with the highest priority, or `None` when
/// taskbar integration is wholly unsupported on this host.
pub fn acquire() -> Option<&'static dyn Taskbar> {
    taskbars().filter(|taskbar| taskbar.available()).max_by_key(|taskbar| taskbar.priority())
}

#[macro_export]
macro_rules! register_taskbar {
    ($taskbar:expr) => {
        inventory::submit! {
            $crate::TaskbarRegistration { taskbar: $taskbar }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskbarError;
    use crate::feature::{Feature, FeatureSet};
    use crate::image::BadgeImage;
    use crate::menu::TaskbarMenu;
    use crate::progress::{ProgressState, ProgressValue};
    use crate::taskbar::WindowHandle;
    use rstest::rstest;

    struct StubTaskbar {
        name: &'static str,
        features: FeatureSet,
        priority: i32,
    }

    impl Taskbar for StubTaskbar {
        fn name(&self) -> &'static str {
            self.name
        }

        fn features(&self) -> FeatureSet {
            self.features
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn set_badge_text(&self, _text: &str) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_window_badge_image(
            &self,
            _window: WindowHandle,
            _image: &BadgeImage,
        ) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_icon_image(&self, _image: &BadgeImage) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_menu(&self, _menu: &TaskbarMenu) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_window_progress_state(
            &self,
            _window: WindowHandle,
            _state: ProgressState,
        ) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_progress_value(&self, _value: ProgressValue) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn set_window_progress_value(
            &self,
            _window: WindowHandle,
            _value: ProgressValue,
        ) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn request_user_attention(
            &self,
            _enabled: bool,
            _critical: bool,
        ) -> Result<(), TaskbarError> {
            Ok(())
        }

        fn request_window_user_attention(&self, _window: WindowHandle) -> Result<(), TaskbarError> {
            Err(TaskbarError::Unsupported(Feature::UserAttentionWindow))
        }
    }

    static EMPTY_STUB: StubTaskbar =
        StubTaskbar { name: "empty-stub", features: FeatureSet::empty(), priority: 50 };

    static LOW_STUB: StubTaskbar =
        StubTaskbar { name: "low-stub", features: FeatureSet::MENU, priority: 1 };

    static HIGH_STUB: StubTaskbar =
        StubTaskbar { name: "high-stub", features: FeatureSet::MENU, priority: 10 };

    register_taskbar!(&EMPTY_STUB);
    register_taskbar!(&LOW_STUB);
    register_taskbar!(&HIGH_STUB);

    #[rstest]
    fn registration_exposes_backends() {
        let names: Vec<_> = taskbars().map(|taskbar| taskbar.name()).collect();
        assert!(names.contains(&"low-stub"));
        assert!(names.contains(&"high-stub"));
    }

    #[rstest]
    fn acquire_skips_unavailable_and_prefers_priority() {
        let acquired = acquire().expect("stub backends are linked");
        assert_eq!(acquired.name(), "high-stub");
    }

    #[rstest]
    fn empty_feature_set_means_unavailable() {
        assert!(!EMPTY_STUB.available());
        assert!(LOW_STUB.available());
    }
}
