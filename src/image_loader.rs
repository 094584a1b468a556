//! Image loading with support for multiple formats
//!
//! This module provides a single entry point for decoding images into the
//! RGBA representation used by the analyzer. All formats supported by the
//! `image` crate are accepted: JPEG, PNG, GIF, WebP, TIFF, BMP, ICO, TGA,
//! EXR, PNM, QOI, DDS, HDR, and AVIF.
//!
//! ## Design
//!
//! Every decoded image is normalized to 8-bit RGBA so the filtering stage
//! sees a uniform pixel layout regardless of the source format. Paletted,
//! grayscale, and opaque images gain a fully opaque alpha channel in the
//! conversion.

use crate::error::{AnalysisError, Result};
use image::RgbaImage;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// OpenEXR image
    Exr,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
    /// DDS image
    Dds,
    /// HDR image
    Hdr,
    /// AVIF image
    Avif,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "exr" => Some(ImageFormat::Exr),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            "dds" => Some(ImageFormat::Dds),
            "hdr" => Some(ImageFormat::Hdr),
            "avif" => Some(ImageFormat::Avif),
            _ => None,
        }
    }
}

/// Load an image from disk and normalize to 8-bit RGBA
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// An [`RgbaImage`] with one (r, g, b, a) quadruple per pixel
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The file extension is not a recognized image format
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use dominant_colors::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("logo.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), dominant_colors::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    use image::ImageReader;

    if ImageFormat::from_extension(path).is_none() {
        return Err(AnalysisError::processing(format!(
            "Unknown image format for file: {}",
            path.display()
        )));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgba8())
}
