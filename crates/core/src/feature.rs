use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One taskbar/dock capability a backend may advertise.
///
/// Declaration order is part of the contract: capability probes report the
/// supported subset in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    IconBadgeText,
    IconBadgeNumber,
    IconBadgeImageWindow,
    IconImage,
    Menu,
    ProgressStateWindow,
    ProgressValue,
    ProgressValueWindow,
    UserAttention,
    UserAttentionWindow,
}

impl Feature {
    /// Every known capability, in declaration order.
    pub const ALL: [Feature; 10] = [
        Feature::IconBadgeText,
        Feature::IconBadgeNumber,
        Feature::IconBadgeImageWindow,
        Feature::IconImage,
        Feature::Menu,
        Feature::ProgressStateWindow,
        Feature::ProgressValue,
        Feature::ProgressValueWindow,
        Feature::UserAttention,
        Feature::UserAttentionWindow,
    ];

    /// Human-readable label used by probe output and section titles.
    pub fn label(self) -> &'static str {
        match self {
            Feature::IconBadgeText => "Icon badge text",
            Feature::IconBadgeNumber => "Icon badge number",
            Feature::IconBadgeImageWindow => "Icon badge image (window)",
            Feature::IconImage => "Icon image",
            Feature::Menu => "Menu",
            Feature::ProgressStateWindow => "Progress state (window)",
            Feature::ProgressValue => "Progress value",
            Feature::ProgressValueWindow => "Progress value (window)",
            Feature::UserAttention => "User attention",
            Feature::UserAttentionWindow => "User attention (window)",
        }
    }

    fn flag(self) -> FeatureSet {
        match self {
            Feature::IconBadgeText => FeatureSet::ICON_BADGE_TEXT,
            Feature::IconBadgeNumber => FeatureSet::ICON_BADGE_NUMBER,
            Feature::IconBadgeImageWindow => FeatureSet::ICON_BADGE_IMAGE_WINDOW,
            Feature::IconImage => FeatureSet::ICON_IMAGE,
            Feature::Menu => FeatureSet::MENU,
            Feature::ProgressStateWindow => FeatureSet::PROGRESS_STATE_WINDOW,
            Feature::ProgressValue => FeatureSet::PROGRESS_VALUE,
            Feature::ProgressValueWindow => FeatureSet::PROGRESS_VALUE_WINDOW,
            Feature::UserAttention => FeatureSet::USER_ATTENTION,
            Feature::UserAttentionWindow => FeatureSet::USER_ATTENTION_WINDOW,
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

bitflags::bitflags! {
    /// Set of [`Feature`] values advertised by a backend.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FeatureSet: u16 {
        const ICON_BADGE_TEXT = 1 << 0;
        const ICON_BADGE_NUMBER = 1 << 1;
        const ICON_BADGE_IMAGE_WINDOW = 1 << 2;
        const ICON_IMAGE = 1 << 3;
        const MENU = 1 << 4;
        const PROGRESS_STATE_WINDOW = 1 << 5;
        const PROGRESS_VALUE = 1 << 6;
        const PROGRESS_VALUE_WINDOW = 1 << 7;
        const USER_ATTENTION = 1 << 8;
        const USER_ATTENTION_WINDOW = 1 << 9;
    }
}

impl FeatureSet {
    /// Whether the set advertises the given capability.
    pub fn supports(self, feature: Feature) -> bool {
        self.contains(feature.flag())
    }

    /// Supported features in declaration order.
    pub fn iter_features(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |feature| self.supports(*feature))
    }
}

impl From<Feature> for FeatureSet {
    fn from(feature: Feature) -> Self {
        feature.flag()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(FeatureSet::empty(), |set, feature| set | feature.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn all_features_round_trip_through_set() {
        let set: FeatureSet = Feature::ALL.into_iter().collect();
        assert_eq!(set, FeatureSet::all());
        let back: Vec<_> = set.iter_features().collect();
        assert_eq!(back, Feature::ALL.to_vec());
    }

    #[rstest]
    fn partial_set_preserves_declaration_order() {
        let set = FeatureSet::USER_ATTENTION | FeatureSet::ICON_BADGE_NUMBER;
        let features: Vec<_> = set.iter_features().collect();
        assert_eq!(features, vec![Feature::IconBadgeNumber, Feature::UserAttention]);
    }

    #[rstest]
    fn supports_matches_membership() {
        let set = FeatureSet::MENU;
        assert!(set.supports(Feature::Menu));
        assert!(!set.supports(Feature::IconImage));
    }
}
