//! CIE LCh(ab): cylindrical hue/chroma form of LAB
//!
//! This is the color-appearance model used for seed scoring: hue is the
//! circular position on the perceptual color wheel, chroma the colorfulness
//! magnitude independent of hue and lightness.

use super::lab::{argb_to_lab, Lab};

/// Perceptual hue/chroma coordinate of a color
/// - hue: degrees in [0, 360)
/// - chroma: non-negative colorfulness magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub hue: f32,
    pub chroma: f32,
}

/// Convert a LAB color to its hue/chroma coordinate
///
/// Neutral colors (a and b near zero) have chroma near zero; their hue is
/// numerically arbitrary but stable for a given input.
#[inline]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let chroma = lab.a.hypot(lab.b);
    let mut hue = lab.b.atan2(lab.a).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }
    Lch { hue, chroma }
}

/// Convert a packed ARGB color to its hue/chroma coordinate. Alpha is ignored.
#[inline]
pub fn argb_to_lch(color: u32) -> Lch {
    lab_to_lch(argb_to_lab(color))
}
