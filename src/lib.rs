//! # Dominant Colors
//!
//! A Rust crate for finding the most frequent colors in an image.
//!
//! The analyzer decodes an image to 8-bit RGBA, discards near-transparent
//! pixels and pixels matching a navy-background bounding box, tallies the
//! remaining exact RGB triples in one pass, and reports the most frequent
//! colors with hex renderings and pixel counts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_colors::analyze_image;
//! use std::path::Path;
//!
//! let report = analyze_image(Path::new("logo.png"))?;
//! for entry in &report.colors {
//!     println!("{} {} x{}", entry.color, entry.hex, entry.count);
//! }
//! # Ok::<(), dominant_colors::AnalysisError>(())
//! ```

use image::RgbaImage;
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;

pub use color::{ColorCount, ColorHistogram, PaletteReport, PixelFilter, Rgb};
pub use config::{AnalyzerConfig, BackgroundFilterConfig};
pub use error::{AnalysisError, Result};

/// Analyze an image file with the default configuration
///
/// This is the main entry point. It decodes the image at `path`, applies
/// the transparency and background filters, and returns the most frequent
/// remaining colors.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// A [`PaletteReport`] with the ranked colors and pixel totals. An empty
/// `colors` vector means no pixel survived filtering.
///
/// # Errors
///
/// Returns `AnalysisError` if the image cannot be loaded or decoded.
pub fn analyze_image(path: &Path) -> Result<PaletteReport> {
    analyze_image_with_config(path, &AnalyzerConfig::default())
}

/// Analyze an image file with a custom configuration
///
/// # Errors
///
/// Returns `AnalysisError` if the image cannot be loaded or decoded.
pub fn analyze_image_with_config(path: &Path, config: &AnalyzerConfig) -> Result<PaletteReport> {
    let image = image_loader::load_image(path)?;
    Ok(analyze_rgba(&image, config))
}

/// Analyze an already-decoded RGBA image
///
/// Pure counting pass with no I/O; this is the entry point used by tests
/// and benchmarks.
pub fn analyze_rgba(image: &RgbaImage, config: &AnalyzerConfig) -> PaletteReport {
    let filter = PixelFilter::from_config(config);
    let mut histogram = ColorHistogram::new();
    let mut pixels_total: u64 = 0;

    for pixel in image.pixels() {
        pixels_total += 1;

        if filter.retains(pixel) {
            let [r, g, b, _] = pixel.0;
            histogram.record(Rgb::new(r, g, b));
        }
    }

    let colors = histogram
        .top(config.top_colors)
        .into_iter()
        .map(|(color, count)| ColorCount {
            hex: color.to_hex(),
            color,
            count,
        })
        .collect();

    PaletteReport {
        colors,
        pixels_total,
        pixels_counted: histogram.recorded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_analyze_rgba_counts_and_ranks() {
        // 3x1: two orange pixels and one navy background pixel
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([200, 100, 50, 255]));
        image.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        image.put_pixel(2, 0, Rgba([0, 36, 93, 255]));

        let report = analyze_rgba(&image, &AnalyzerConfig::default());

        assert_eq!(report.pixels_total, 3);
        assert_eq!(report.pixels_counted, 2);
        assert_eq!(report.colors.len(), 1);
        assert_eq!(report.colors[0].color, Rgb::new(200, 100, 50));
        assert_eq!(report.colors[0].hex, "#c86432");
        assert_eq!(report.colors[0].count, 2);
    }

    #[test]
    fn test_analyze_rgba_empty_when_all_filtered() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));

        let report = analyze_rgba(&image, &AnalyzerConfig::default());

        assert!(report.is_empty());
        assert_eq!(report.pixels_total, 16);
        assert_eq!(report.pixels_counted, 0);
    }

    #[test]
    fn test_analyze_rgba_respects_top_colors() {
        let mut image = RgbaImage::new(6, 1);
        for x in 0..6 {
            image.put_pixel(x, 0, Rgba([255, x as u8, 0, 255]));
        }

        let mut config = AnalyzerConfig::default();
        config.top_colors = 2;
        let report = analyze_rgba(&image, &config);

        assert_eq!(report.colors.len(), 2);
        assert_eq!(report.pixels_counted, 6);
    }
}
