//! Bundled badge/icon resource.

use dockpilot_core::BadgeImage;

static BADGE_PNG: &[u8] = include_bytes!("../assets/cloud-check.png");

/// Decodes the bundled badge image, substituting the blank placeholder on
/// any decode failure. The caller's action always completes.
pub(crate) fn bundled_badge() -> BadgeImage {
    load_or_blank(BADGE_PNG)
}

fn load_or_blank(bytes: &[u8]) -> BadgeImage {
    decode(bytes).unwrap_or_else(|| {
        tracing::warn!("bundled badge image could not be decoded, using blank placeholder");
        BadgeImage::blank()
    })
}

fn decode(bytes: &[u8]) -> Option<BadgeImage> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    BadgeImage::from_rgba(width, height, rgba.into_raw()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bundled_resource_decodes() {
        let badge = bundled_badge();
        assert_eq!((badge.width(), badge.height()), (32, 32));
        assert!(badge.pixels().iter().any(|byte| *byte != 0));
    }

    #[rstest]
    fn undecodable_input_yields_blank_placeholder() {
        let badge = load_or_blank(b"definitely not a png");
        assert_eq!(badge, BadgeImage::blank());
    }

    #[rstest]
    fn truncated_png_yields_blank_placeholder() {
        let badge = load_or_blank(&BADGE_PNG[..BADGE_PNG.len() / 2]);
        assert_eq!(badge, BadgeImage::blank());
    }
}
