//! In-memory mock taskbar backend for DockPilot tests.
//!
//! Records every operation in a call log and answers capability queries from
//! a configurable feature set, so panel and probe behavior can be asserted
//! without a native taskbar. Operations on a disabled feature return
//! [`TaskbarError::Unsupported`], which keeps the "never call an
//! unadvertised operation" invariant checkable.

use dockpilot_core::{
    BadgeImage, Feature, FeatureSet, ProgressState, ProgressValue, Taskbar, TaskbarError,
    TaskbarMenu, WindowHandle, register_taskbar,
};
use std::sync::Mutex;

static MOCK_TASKBAR: MockTaskbar = MockTaskbar::new();

register_taskbar!(&MOCK_TASKBAR);

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskbarCall {
    SetBadge(String),
    SetWindowBadgeImage { window: WindowHandle, width: u32, height: u32 },
    SetIconImage { width: u32, height: u32 },
    SetMenu(Vec<String>),
    SetWindowProgressState { window: WindowHandle, state: ProgressState },
    SetProgressValue(u8),
    SetWindowProgressValue { window: WindowHandle, value: u8 },
    RequestUserAttention { enabled: bool, critical: bool },
    RequestWindowUserAttention { window: WindowHandle },
}

#[derive(Debug)]
struct MockTaskbar {
    features: Mutex<FeatureSet>,
    calls: Mutex<Vec<TaskbarCall>>,
}

impl MockTaskbar {
    const NAME: &'static str = "Mock Taskbar";

    const fn new() -> Self {
        MockTaskbar { features: Mutex::new(FeatureSet::all()), calls: Mutex::new(Vec::new()) }
    }

    fn record(&self, feature: Feature, call: TaskbarCall) -> Result<(), TaskbarError> {
        if !self.is_supported(feature) {
            return Err(TaskbarError::Unsupported(feature));
        }
        tracing::debug!(?call, "mock taskbar call");
        self.calls.lock().expect("mock call log poisoned").push(call);
        Ok(())
    }
}

impl Taskbar for MockTaskbar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn features(&self) -> FeatureSet {
        *self.features.lock().expect("mock feature set poisoned")
    }

    // Shadows native backends whenever the mock crate is linked.
    fn priority(&self) -> i32 {
        100
    }

    fn set_badge_text(&self, text: &str) -> Result<(), TaskbarError> {
        // Text and number badges share the operation; accept the call if
        // either badge feature is advertised.
        let feature = if self.is_supported(Feature::IconBadgeText) {
            Feature::IconBadgeText
        } else {
            Feature::IconBadgeNumber
        };
        self.record(feature, TaskbarCall::SetBadge(text.to_owned()))
    }

    fn set_window_badge_image(
        &self,
        window: WindowHandle,
        image: &BadgeImage,
    ) -> Result<(), TaskbarError> {
        self.record(
            Feature::IconBadgeImageWindow,
            TaskbarCall::SetWindowBadgeImage {
                window,
                width: image.width(),
                height: image.height(),
            },
        )
    }

    fn set_icon_image(&self, image: &BadgeImage) -> Result<(), TaskbarError> {
        self.record(
            Feature::IconImage,
            TaskbarCall::SetIconImage { width: image.width(), height: image.height() },
        )
    }

    fn set_menu(&self, menu: &TaskbarMenu) -> Result<(), TaskbarError> {
        self.record(Feature::Menu, TaskbarCall::SetMenu(menu.items().to_vec()))
    }

    fn set_window_progress_state(
        &self,
        window: WindowHandle,
        state: ProgressState,
    ) -> Result<(), TaskbarError> {
        self.record(
            Feature::ProgressStateWindow,
            TaskbarCall::SetWindowProgressState { window, state },
        )
    }

    fn set_progress_value(&self, value: ProgressValue) -> Result<(), TaskbarError> {
        self.record(Feature::ProgressValue, TaskbarCall::SetProgressValue(value.get()))
    }

    fn set_window_progress_value(
        &self,
        window: WindowHandle,
        value: ProgressValue,
    ) -> Result<(), TaskbarError> {
        self.record(
            Feature::ProgressValueWindow,
            TaskbarCall::SetWindowProgressValue { window, value: value.get() },
        )
    }

    fn request_user_attention(&self, enabled: bool, critical: bool) -> Result<(), TaskbarError> {
        self.record(
            Feature::UserAttention,
            TaskbarCall::RequestUserAttention { enabled, critical },
        )
    }

    fn request_window_user_attention(&self, window: WindowHandle) -> Result<(), TaskbarError> {
        self.record(
            Feature::UserAttentionWindow,
            TaskbarCall::RequestWindowUserAttention { window },
        )
    }
}

/// The registered mock backend.
pub fn taskbar() -> &'static dyn Taskbar {
    &MOCK_TASKBAR
}

/// Replaces the advertised feature set.
pub fn set_supported_features(features: FeatureSet) {
    *MOCK_TASKBAR.features.lock().expect("mock feature set poisoned") = features;
}

/// Drains and returns every call recorded so far.
pub fn take_call_log() -> Vec<TaskbarCall> {
    let mut calls = MOCK_TASKBAR.calls.lock().expect("mock call log poisoned");
    calls.drain(..).collect()
}

/// Restores the default state: all features advertised, empty call log.
pub fn reset_state() {
    set_supported_features(FeatureSet::all());
    MOCK_TASKBAR.calls.lock().expect("mock call log poisoned").clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockpilot_core::acquire;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[serial]
    fn mock_is_registered_and_acquired() {
        reset_state();
        let taskbar = acquire().expect("mock backend is linked");
        assert_eq!(taskbar.name(), MockTaskbar::NAME);
        assert_eq!(taskbar.features(), FeatureSet::all());
    }

    #[rstest]
    #[serial]
    fn calls_are_recorded_in_order() {
        reset_state();
        let taskbar = taskbar();
        taskbar.set_badge_text("3").unwrap();
        taskbar.set_progress_value(ProgressValue::new(40).unwrap()).unwrap();
        taskbar.request_user_attention(true, false).unwrap();

        assert_eq!(
            take_call_log(),
            vec![
                TaskbarCall::SetBadge("3".into()),
                TaskbarCall::SetProgressValue(40),
                TaskbarCall::RequestUserAttention { enabled: true, critical: false },
            ]
        );
    }

    #[rstest]
    #[serial]
    fn disabled_features_reject_calls() {
        reset_state();
        set_supported_features(FeatureSet::MENU);
        let taskbar = taskbar();

        let err = taskbar.set_icon_image(&BadgeImage::blank()).unwrap_err();
        assert_eq!(err, TaskbarError::Unsupported(Feature::IconImage));
        let err = taskbar.request_window_user_attention(WindowHandle::MAIN).unwrap_err();
        assert_eq!(err, TaskbarError::Unsupported(Feature::UserAttentionWindow));

        taskbar.set_menu(&TaskbarMenu::new().add("Item 1")).unwrap();
        assert_eq!(take_call_log(), vec![TaskbarCall::SetMenu(vec!["Item 1".into()])]);
        reset_state();
    }

    #[rstest]
    #[serial]
    fn badge_falls_back_to_number_feature() {
        reset_state();
        set_supported_features(FeatureSet::ICON_BADGE_NUMBER);
        taskbar().set_badge_text("7").unwrap();
        assert_eq!(take_call_log(), vec![TaskbarCall::SetBadge("7".into())]);
        reset_state();
    }
}
