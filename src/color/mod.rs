//! Color key and report types
//!
//! The analyzer counts exact 8-bit RGB triples; no quantization or
//! perceptual grouping is applied. This module defines the counting key
//! ([`Rgb`]) and the result types returned by the analysis entry points.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod filter;
pub mod histogram;

pub use filter::PixelFilter;
pub use histogram::ColorHistogram;

/// Exact 8-bit RGB triple used as the counting key.
///
/// Equality is component-wise; two pixels count as the same color only if
/// all three channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase zero-padded hex representation, e.g. `#c86432`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One ranked color with its pixel count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    /// The counted color
    pub color: Rgb,
    /// Hex rendering of `color` (lowercase, zero-padded)
    pub hex: String,
    /// Number of qualifying pixels with this exact color
    pub count: u64,
}

/// Complete analysis result
///
/// `colors` is ordered by descending count; equal counts keep their first
/// raster-order appearance. An empty `colors` means no pixel survived the
/// transparency and background filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteReport {
    /// Ranked colors, at most the configured top-N
    pub colors: Vec<ColorCount>,
    /// Total pixels decoded from the image
    pub pixels_total: u64,
    /// Pixels that survived filtering and were counted
    pub pixels_counted: u64,
}

impl PaletteReport {
    /// True when no pixel qualified for counting
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
