//! Pixel exclusion rules
//!
//! Two rules decide whether a pixel participates in the count:
//!
//! - Transparency: alpha below the threshold is skipped.
//! - Background: pixels with all three channels strictly below the navy
//!   bounding box are skipped. This is a heuristic cut for a dark navy
//!   background, not an exact color match.

use crate::config::AnalyzerConfig;
use image::Rgba;

/// Filter deciding which pixels participate in the color count
#[derive(Debug, Clone, Copy)]
pub struct PixelFilter {
    alpha_threshold: u8,
    max_red: u8,
    max_green: u8,
    max_blue: u8,
}

impl PixelFilter {
    /// Create a filter with the reference thresholds
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Create a filter from an analyzer configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            alpha_threshold: config.alpha_threshold,
            max_red: config.background.max_red,
            max_green: config.background.max_green,
            max_blue: config.background.max_blue,
        }
    }

    /// Whether a pixel participates in the count
    pub fn retains(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;

        if a < self.alpha_threshold {
            return false;
        }

        // Bounding-box background cut: all three channels must be inside
        // the box for the pixel to be dropped
        !(r < self.max_red && g < self.max_green && b < self.max_blue)
    }
}

impl Default for PixelFilter {
    fn default() -> Self {
        Self::new()
    }
}
