//! Packed 32-bit ARGB channel helpers

/// Fully opaque black.
pub const BLACK: u32 = 0xFF00_0000;

/// Fully opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Alpha channel of a packed ARGB color.
#[inline]
pub fn alpha(color: u32) -> u8 {
    (color >> 24) as u8
}

/// Red channel of a packed ARGB color.
#[inline]
pub fn red(color: u32) -> u8 {
    (color >> 16) as u8
}

/// Green channel of a packed ARGB color.
#[inline]
pub fn green(color: u32) -> u8 {
    (color >> 8) as u8
}

/// Blue channel of a packed ARGB color.
#[inline]
pub fn blue(color: u32) -> u8 {
    color as u8
}

/// Pack four channels into an ARGB color.
#[inline]
pub fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Replace the alpha channel of a packed ARGB color.
#[inline]
pub fn with_alpha(color: u32, alpha: u8) -> u32 {
    (color & 0x00FF_FFFF) | ((alpha as u32) << 24)
}

/// Drop the alpha channel, leaving the 24-bit RGB value.
#[inline]
pub fn rgb24(color: u32) -> u32 {
    color & 0x00FF_FFFF
}
