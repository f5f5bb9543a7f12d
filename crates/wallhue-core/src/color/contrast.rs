//! WCAG relative luminance and contrast ratio

use super::compose::composite_over;
use super::lab::srgb_to_linear;
use super::packed::{alpha, blue, green, red};

/// WCAG relative luminance of a packed sRGB color, in [0.0, 1.0]
///
/// Alpha is ignored; use [`contrast_ratio`] for translucent foregrounds.
pub fn relative_luminance(color: u32) -> f32 {
    0.2126 * srgb_to_linear(red(color))
        + 0.7152 * srgb_to_linear(green(color))
        + 0.0722 * srgb_to_linear(blue(color))
}

/// WCAG contrast ratio between a foreground and an opaque background
///
/// A translucent foreground is composited over the background before
/// measuring. The ratio is symmetric and lies in [1.0, 21.0].
pub fn contrast_ratio(fg: u32, bg: u32) -> f32 {
    let fg = if alpha(fg) == 255 {
        fg
    } else {
        composite_over(fg, bg)
    };
    let fl = relative_luminance(fg) + 0.05;
    let bl = relative_luminance(bg) + 0.05;
    fl.max(bl) / fl.min(bl)
}
