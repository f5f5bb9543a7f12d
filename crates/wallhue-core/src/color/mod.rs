//! Perceptual color primitives
//!
//! Packed-ARGB channel helpers, sRGB -> CIE LAB / LCh(ab) conversions,
//! WCAG relative luminance and contrast, and source-over compositing.

mod compose;
mod contrast;
mod lab;
mod lch;
mod packed;


// Re-export primary types
pub use lab::Lab;
pub use lch::Lch;

// Re-export channel helpers
pub use packed::{alpha, argb, blue, green, red, rgb24, with_alpha, BLACK, WHITE};

// Re-export conversions
pub use lab::argb_to_lab;
pub use lch::{argb_to_lch, lab_to_lch};

// Re-export compositing and contrast
pub use compose::composite_over;
pub use contrast::{contrast_ratio, relative_luminance};
