use crate::error::TaskbarError;

/// Edge length of the blank placeholder badge.
const PLACEHOLDER_EDGE: u32 = 32;

/// Owned RGBA8 pixel buffer used for badge and application icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl BadgeImage {
    /// Builds an image from a tightly packed RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TaskbarError> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(TaskbarError::InvalidImage { expected, actual: pixels.len() });
        }
        Ok(BadgeImage { width, height, pixels })
    }

    /// The fixed 32x32 placeholder substituted when a bundled resource
    /// cannot be loaded.
    pub fn blank() -> Self {
        let edge = PLACEHOLDER_EDGE as usize;
        BadgeImage {
            width: PLACEHOLDER_EDGE,
            height: PLACEHOLDER_EDGE,
            pixels: vec![0; edge * edge * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
