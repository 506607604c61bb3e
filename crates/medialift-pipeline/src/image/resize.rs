//! Bounded, aspect-preserving downscale.

use image::imageops::FilterType;
use image::DynamicImage;

pub const DEFAULT_MAX_WIDTH: u32 = 1080;
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Dimension bounds for normalized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeBounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl ResizeBounds {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Compute output dimensions for a bounded downscale.
///
/// Landscape inputs are scaled by `max_width / width` when too wide;
/// portrait and square inputs by `max_height / height` when too tall.
/// Aspect ratio is preserved, in-bounds inputs pass through unchanged, and
/// this never upscales.
pub fn bounded_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width > height {
        if width > max_width {
            let scale = max_width as f64 / width as f64;
            let scaled_height = (height as f64 * scale).round().max(1.0) as u32;
            return (max_width, scaled_height);
        }
    } else if height > max_height {
        let scale = max_height as f64 / height as f64;
        let scaled_width = (width as f64 * scale).round().max(1.0) as u32;
        return (scaled_width, max_height);
    }
    (width, height)
}

/// Downscale `img` so that neither dimension exceeds `bounds`.
///
/// Returns the image unchanged when it is already within bounds.
pub fn shrink_to_bounds(img: &DynamicImage, bounds: ResizeBounds) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    let (out_width, out_height) =
        bounded_dimensions(width, height, bounds.max_width, bounds.max_height);

    if (out_width, out_height) == (width, height) {
        return img.clone();
    }

    img.resize_exact(out_width, out_height, FilterType::Lanczos3)
}
