//! Dark-hint analysis
//!
//! One pass over a pixel buffer decides whether dark text or a dark theme
//! reads well over the image, with a simulated dim overlay factored into the
//! luminance measurement. Read-only over the buffer; pure for a given input.

#[cfg(test)]
mod tests;

use crate::color::{alpha, argb_to_lab, composite_over, contrast_ratio, with_alpha, BLACK};
use crate::models::{ColorHints, PixelBuffer};

/// Mean L* below which a dark theme is optimal for the image.
pub const DARK_THEME_MEAN_LUMINANCE: f32 = 30.0;

/// Minimum mean L* an image needs to support dark text.
pub const BRIGHT_IMAGE_MEAN_LUMINANCE: f32 = 70.0;

/// Contrast against black at or below which a pixel counts as dark.
pub const DARK_PIXEL_CONTRAST: f32 = 5.5;

/// Largest fraction of dark pixels a dark-text image may contain.
pub const MAX_DARK_AREA: f32 = 0.05;

/// Derive the dark-text and dark-theme hints for a pixel buffer.
///
/// `dim_amount` is saturated into [0, 1] and models a black overlay with
/// alpha `round(255 * dim_amount)` composited over every pixel. Mean
/// luminance (CIE L*) is measured on the dimmed colors; the dark-pixel
/// count uses the un-dimmed pixels, so dimming makes dark-theme more likely
/// without changing legibility accounting. An empty buffer yields no hints.
///
/// Only the text and theme bits are produced here; the pixel provenance bit
/// is added by `ImageColors::from_pixels`.
pub fn compute_dark_hints(pixels: &PixelBuffer, dim_amount: f32) -> ColorHints {
    if pixels.is_empty() {
        return ColorHints::empty();
    }

    let dim_amount = dim_amount.clamp(0.0, 1.0);
    let overlay = with_alpha(BLACK, (255.0 * dim_amount).round() as u8);

    let pixel_count = pixels.len();
    let max_dark_area = pixel_count as f32 * MAX_DARK_AREA;

    let mut total_luminance = 0.0f64;
    let mut dark_pixels = 0usize;
    for &pixel in pixels.pixels() {
        // Luminance is measured on the as-displayed (dimmed) color
        let dimmed = composite_over(overlay, pixel);
        total_luminance += argb_to_lab(dimmed).l as f64;

        // A dark pixel mass would make dark text illegible; measured on the
        // original pixel, skipping fully transparent ones
        let satisfies_text_contrast = contrast_ratio(pixel, BLACK) > DARK_PIXEL_CONTRAST;
        if !satisfies_text_contrast && alpha(pixel) != 0 {
            dark_pixels += 1;
        }
    }

    let mean_luminance = (total_luminance / pixel_count as f64) as f32;

    let mut hints = ColorHints::empty();
    if mean_luminance > BRIGHT_IMAGE_MEAN_LUMINANCE && (dark_pixels as f32) < max_dark_area {
        hints |= ColorHints::SUPPORTS_DARK_TEXT;
    }
    if mean_luminance < DARK_THEME_MEAN_LUMINANCE {
        hints |= ColorHints::SUPPORTS_DARK_THEME;
    }

    crate::verbose_println!(
        "[wallhue] mean luminance: {:.2}, dark pixels: {}/{} (max {:.1})",
        mean_luminance,
        dark_pixels,
        pixel_count,
        max_dark_area
    );

    hints
}
