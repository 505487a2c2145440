//! The control panel: one widget section per supported capability, each
//! wired to exactly one backend operation.

use crate::resource;
use dockpilot_core::{
    Feature, ProgressState, ProgressValue, Taskbar, TaskbarMenu, WindowHandle,
};
use eframe::egui;

const BADGE_NUMBER_DEFAULT: u8 = 5;

/// Current widget state of one panel section. Constructed only for
/// capabilities the backend advertises; dropped with the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    BadgeText { input: String },
    BadgeNumber { value: u8 },
    BadgeImage,
    IconImage,
    Menu,
    ProgressState { state: ProgressState },
    ProgressValue { value: u8 },
    ProgressValueWindow { value: u8 },
    UserAttention { enabled: bool, critical: bool },
    UserAttentionWindow,
}

/// Capability-to-section table, in [`Feature`] declaration order. Panel
/// construction is a filter-map over this table; there is no per-feature
/// branching anywhere else.
const SECTIONS: [(Feature, fn() -> Section); 10] = [
    (Feature::IconBadgeText, || Section::BadgeText { input: String::new() }),
    (Feature::IconBadgeNumber, || Section::BadgeNumber { value: BADGE_NUMBER_DEFAULT }),
    (Feature::IconBadgeImageWindow, || Section::BadgeImage),
    (Feature::IconImage, || Section::IconImage),
    (Feature::Menu, || Section::Menu),
    (Feature::ProgressStateWindow, || Section::ProgressState { state: ProgressState::Off }),
    (Feature::ProgressValue, || Section::ProgressValue { value: 0 }),
    (Feature::ProgressValueWindow, || Section::ProgressValueWindow { value: 0 }),
    (Feature::UserAttention, || Section::UserAttention { enabled: false, critical: false }),
    (Feature::UserAttentionWindow, || Section::UserAttentionWindow),
];

impl Section {
    pub fn for_feature(feature: Feature) -> Option<Section> {
        SECTIONS.iter().find(|(entry, _)| *entry == feature).map(|(_, build)| build())
    }

    pub fn feature(&self) -> Feature {
        match self {
            Section::BadgeText { .. } => Feature::IconBadgeText,
            Section::BadgeNumber { .. } => Feature::IconBadgeNumber,
            Section::BadgeImage => Feature::IconBadgeImageWindow,
            Section::IconImage => Feature::IconImage,
            Section::Menu => Feature::Menu,
            Section::ProgressState { .. } => Feature::ProgressStateWindow,
            Section::ProgressValue { .. } => Feature::ProgressValue,
            Section::ProgressValueWindow { .. } => Feature::ProgressValueWindow,
            Section::UserAttention { .. } => Feature::UserAttention,
            Section::UserAttentionWindow => Feature::UserAttentionWindow,
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, taskbar: &dyn Taskbar) {
        let title = self.feature().label();
        ui.group(|ui| {
            ui.label(egui::RichText::new(title).strong());
            match self {
                Section::BadgeText { input } => {
                    let response = ui.text_edit_singleline(input);
                    let submitted = response.lost_focus()
                        && ui.input(|state| state.key_pressed(egui::Key::Enter));
                    if submitted {
                        apply_badge_text(taskbar, input);
                    }
                }
                Section::BadgeNumber { value } => {
                    let response = ui.add(egui::DragValue::new(value).range(1..=10));
                    if response.changed() {
                        apply_badge_number(taskbar, *value);
                    }
                }
                Section::BadgeImage => {
                    if ui.button("Apply window badge").clicked() {
                        apply_window_badge_image(taskbar);
                    }
                }
                Section::IconImage => {
                    if ui.button("Apply icon image").clicked() {
                        apply_icon_image(taskbar);
                    }
                }
                Section::Menu => {
                    if ui.button("Set menu").clicked() {
                        apply_menu(taskbar);
                    }
                }
                Section::ProgressState { state } => {
                    let mut changed = false;
                    egui::ComboBox::from_id_salt("progress-state-window")
                        .selected_text(state.label())
                        .show_ui(ui, |ui| {
                            for candidate in ProgressState::ALL {
                                changed |= ui
                                    .selectable_value(state, candidate, candidate.label())
                                    .clicked();
                            }
                        });
                    if changed {
                        apply_window_progress_state(taskbar, *state);
                    }
                }
                Section::ProgressValue { value } => {
                    if ui.add(egui::Slider::new(value, 0..=100)).changed() {
                        apply_progress_value(taskbar, *value);
                    }
                }
                Section::ProgressValueWindow { value } => {
                    if ui.add(egui::Slider::new(value, 0..=100)).changed() {
                        apply_window_progress_value(taskbar, *value);
                    }
                }
                Section::UserAttention { enabled, critical } => {
                    let mut changed = false;
                    ui.horizontal(|ui| {
                        changed |= ui.checkbox(enabled, "Enabled").changed();
                        changed |= ui.checkbox(critical, "Critical").changed();
                    });
                    if changed {
                        apply_user_attention(taskbar, *enabled, *critical);
                    }
                }
                Section::UserAttentionWindow => {
                    if ui.button("Request window attention").clicked() {
                        apply_window_user_attention(taskbar);
                    }
                }
            }
        });
        ui.add_space(4.0);
    }
}

/// The assembled panel. The backend handle is passed in explicitly; the
/// panel owns no ambient state.
pub struct ControlPanel {
    taskbar: &'static dyn Taskbar,
    sections: Vec<Section>,
}

impl ControlPanel {
    pub fn new(taskbar: &'static dyn Taskbar) -> Self {
        let features = taskbar.features();
        let sections = SECTIONS
            .iter()
            .filter(|(feature, _)| features.supports(*feature))
            .map(|(_, build)| build())
            .collect();
        ControlPanel { taskbar, sections }
    }

    /// Features of the constructed sections, in panel order.
    pub fn section_features(&self) -> Vec<Feature> {
        self.sections.iter().map(Section::feature).collect()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        for section in &mut self.sections {
            section.show(ui, self.taskbar);
        }
    }
}

fn report(result: Result<(), dockpilot_core::TaskbarError>) {
    if let Err(error) = result {
        tracing::warn!(%error, "taskbar call failed");
    }
}

pub(crate) fn apply_badge_text(taskbar: &dyn Taskbar, text: &str) {
    report(taskbar.set_badge_text(text));
}

pub(crate) fn apply_badge_number(taskbar: &dyn Taskbar, value: u8) {
    report(taskbar.set_badge_text(&value.to_string()));
}

pub(crate) fn apply_window_badge_image(taskbar: &dyn Taskbar) {
    report(taskbar.set_window_badge_image(WindowHandle::MAIN, &resource::bundled_badge()));
}

pub(crate) fn apply_icon_image(taskbar: &dyn Taskbar) {
    report(taskbar.set_icon_image(&resource::bundled_badge()));
}

pub(crate) fn apply_menu(taskbar: &dyn Taskbar) {
    let menu = TaskbarMenu::new().add("Item 1").add("Item 2").add("Item 3");
    report(taskbar.set_menu(&menu));
}

pub(crate) fn apply_window_progress_state(taskbar: &dyn Taskbar, state: ProgressState) {
    report(taskbar.set_window_progress_state(WindowHandle::MAIN, state));
}

pub(crate) fn apply_progress_value(taskbar: &dyn Taskbar, value: u8) {
    match ProgressValue::new(value) {
        Ok(value) => report(taskbar.set_progress_value(value)),
        Err(error) => tracing::warn!(%error, "slider produced an out-of-range value"),
    }
}

pub(crate) fn apply_window_progress_value(taskbar: &dyn Taskbar, value: u8) {
    match ProgressValue::new(value) {
        Ok(value) => report(taskbar.set_window_progress_value(WindowHandle::MAIN, value)),
        Err(error) => tracing::warn!(%error, "slider produced an out-of-range value"),
    }
}

pub(crate) fn apply_user_attention(taskbar: &dyn Taskbar, enabled: bool, critical: bool) {
    report(taskbar.request_user_attention(enabled, critical));
}

pub(crate) fn apply_window_user_attention(taskbar: &dyn Taskbar) {
    report(taskbar.request_window_user_attention(WindowHandle::MAIN));
}

/// Opens the panel window and blocks on the UI event loop until it closes.
pub fn show(taskbar: &'static dyn Taskbar) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([380.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Taskbar control panel",
        options,
        Box::new(move |_cc| Ok(Box::new(PanelApp { panel: ControlPanel::new(taskbar) }))),
    )
}

struct PanelApp {
    panel: ControlPanel,
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.panel.show(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockpilot_core::FeatureSet;
    use dockpilot_platform_mock::{self as mock, TaskbarCall};
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[serial]
    fn sections_exist_iff_feature_is_supported() {
        mock::reset_state();
        for feature in Feature::ALL {
            mock::set_supported_features(FeatureSet::from(feature));
            let panel = ControlPanel::new(mock::taskbar());
            assert_eq!(panel.section_features(), vec![feature]);
        }
        mock::reset_state();
    }

    #[rstest]
    #[serial]
    fn full_feature_set_builds_all_sections_in_order() {
        mock::reset_state();
        let panel = ControlPanel::new(mock::taskbar());
        assert_eq!(panel.section_features(), Feature::ALL.to_vec());
    }

    #[rstest]
    #[serial]
    fn menu_only_backend_yields_single_menu_section() {
        mock::reset_state();
        mock::set_supported_features(FeatureSet::MENU);
        let panel = ControlPanel::new(mock::taskbar());
        assert_eq!(panel.section_features(), vec![Feature::Menu]);

        apply_menu(mock::taskbar());
        assert_eq!(
            mock::take_call_log(),
            vec![TaskbarCall::SetMenu(vec![
                "Item 1".into(),
                "Item 2".into(),
                "Item 3".into()
            ])]
        );
        mock::reset_state();
    }

    #[rstest]
    #[serial]
    fn stepper_at_seven_sets_badge_text_seven() {
        mock::reset_state();
        mock::set_supported_features(FeatureSet::ICON_BADGE_NUMBER);
        apply_badge_number(mock::taskbar(), 7);
        assert_eq!(mock::take_call_log(), vec![TaskbarCall::SetBadge("7".into())]);
        mock::reset_state();
    }

    #[rstest]
    #[serial]
    fn badge_text_submit_passes_text_through() {
        mock::reset_state();
        apply_badge_text(mock::taskbar(), "hello");
        assert_eq!(mock::take_call_log(), vec![TaskbarCall::SetBadge("hello".into())]);
    }

    #[rstest]
    #[serial]
    fn badge_image_targets_the_main_window() {
        mock::reset_state();
        apply_window_badge_image(mock::taskbar());
        assert_eq!(
            mock::take_call_log(),
            vec![TaskbarCall::SetWindowBadgeImage {
                window: WindowHandle::MAIN,
                width: 32,
                height: 32
            }]
        );
    }

    #[rstest]
    #[serial]
    fn progress_sliders_emit_global_and_window_calls() {
        mock::reset_state();
        apply_progress_value(mock::taskbar(), 40);
        apply_window_progress_value(mock::taskbar(), 80);
        assert_eq!(
            mock::take_call_log(),
            vec![
                TaskbarCall::SetProgressValue(40),
                TaskbarCall::SetWindowProgressValue { window: WindowHandle::MAIN, value: 80 },
            ]
        );
    }

    #[rstest]
    #[serial]
    fn out_of_range_progress_is_dropped_not_sent() {
        mock::reset_state();
        apply_progress_value(mock::taskbar(), 101);
        assert_eq!(mock::take_call_log(), Vec::new());
    }

    #[rstest]
    #[serial]
    fn attention_toggles_send_the_current_pair() {
        mock::reset_state();
        apply_user_attention(mock::taskbar(), true, false);
        apply_user_attention(mock::taskbar(), true, true);
        assert_eq!(
            mock::take_call_log(),
            vec![
                TaskbarCall::RequestUserAttention { enabled: true, critical: false },
                TaskbarCall::RequestUserAttention { enabled: true, critical: true },
            ]
        );
    }

    #[rstest]
    #[serial]
    fn progress_state_selection_targets_the_window() {
        mock::reset_state();
        apply_window_progress_state(mock::taskbar(), ProgressState::Indeterminate);
        assert_eq!(
            mock::take_call_log(),
            vec![TaskbarCall::SetWindowProgressState {
                window: WindowHandle::MAIN,
                state: ProgressState::Indeterminate
            }]
        );
    }

    #[rstest]
    fn section_defaults_match_the_widget_contract() {
        assert_eq!(
            Section::for_feature(Feature::IconBadgeNumber),
            Some(Section::BadgeNumber { value: 5 })
        );
        assert_eq!(
            Section::for_feature(Feature::ProgressValue),
            Some(Section::ProgressValue { value: 0 })
        );
        assert_eq!(
            Section::for_feature(Feature::ProgressValueWindow),
            Some(Section::ProgressValueWindow { value: 0 })
        );
        assert_eq!(
            Section::for_feature(Feature::UserAttention),
            Some(Section::UserAttention { enabled: false, critical: false })
        );
        assert_eq!(
            Section::for_feature(Feature::ProgressStateWindow),
            Some(Section::ProgressState { state: ProgressState::Off })
        );
    }

    #[rstest]
    fn section_table_covers_every_feature_in_order() {
        let table_features: Vec<_> = SECTIONS.iter().map(|(feature, _)| *feature).collect();
        assert_eq!(table_features, Feature::ALL.to_vec());
        for feature in Feature::ALL {
            let section = Section::for_feature(feature).expect("every feature has a section");
            assert_eq!(section.feature(), feature);
        }
    }
}
