//! Source-over alpha compositing on packed ARGB colors

use super::packed::{alpha, argb, blue, green, red};

/// Composite `fg` over `bg` (source-over)
///
/// Integer 8-bit alpha math: the result alpha is
/// `fa + ba * (255 - fa) / 255` and each channel is the alpha-weighted blend
/// of the two inputs, un-premultiplied by the result alpha.
pub fn composite_over(fg: u32, bg: u32) -> u32 {
    let fa = alpha(fg) as u32;
    let ba = alpha(bg) as u32;
    let out_a = fa + ba * (255 - fa) / 255;
    if out_a == 0 {
        return 0;
    }

    let blend = |f: u8, b: u8| -> u8 {
        (((f as u32) * 255 * fa + (b as u32) * ba * (255 - fa)) / (out_a * 255)) as u8
    };

    argb(
        out_a as u8,
        blend(red(fg), red(bg)),
        blend(green(fg), green(bg)),
        blend(blue(fg), blue(bg)),
    )
}
