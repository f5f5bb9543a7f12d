//! Tests for dark-hint analysis

use super::*;
use crate::color::{argb, WHITE};

fn solid_buffer(width: u32, height: u32, color: u32) -> PixelBuffer {
    let pixels = vec![color; (width * height) as usize];
    PixelBuffer::new(width, height, pixels).unwrap()
}

#[test]
fn test_all_black_supports_dark_theme() {
    let hints = compute_dark_hints(&solid_buffer(8, 8, BLACK), 0.0);
    assert!(hints.contains(ColorHints::SUPPORTS_DARK_THEME));
    assert!(!hints.contains(ColorHints::SUPPORTS_DARK_TEXT));
}

#[test]
fn test_all_white_supports_dark_text() {
    let hints = compute_dark_hints(&solid_buffer(8, 8, WHITE), 0.0);
    assert!(hints.contains(ColorHints::SUPPORTS_DARK_TEXT));
    assert!(!hints.contains(ColorHints::SUPPORTS_DARK_THEME));
}

#[test]
fn test_mid_gray_supports_neither() {
    // L* ~53.6: too dark for dark text, too bright for dark theme
    let hints = compute_dark_hints(&solid_buffer(8, 8, 0xFF80_8080), 0.0);
    assert!(hints.is_empty());
}

#[test]
fn test_empty_buffer_yields_no_hints() {
    let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
    assert!(compute_dark_hints(&empty, 0.0).is_empty());
    assert!(compute_dark_hints(&empty, 1.0).is_empty());
}

#[test]
fn test_full_dim_turns_white_into_dark_theme() {
    // Dimming affects the luminance mean but not dark-pixel accounting
    let hints = compute_dark_hints(&solid_buffer(8, 8, WHITE), 1.0);
    assert!(hints.contains(ColorHints::SUPPORTS_DARK_THEME));
    assert!(!hints.contains(ColorHints::SUPPORTS_DARK_TEXT));
}

#[test]
fn test_dim_amount_is_saturated() {
    let buffer = solid_buffer(8, 8, 0xFFCC_9933);
    assert_eq!(
        compute_dark_hints(&buffer, -0.5),
        compute_dark_hints(&buffer, 0.0)
    );
    assert_eq!(
        compute_dark_hints(&buffer, 1.5),
        compute_dark_hints(&buffer, 1.0)
    );
}

#[test]
fn test_transparent_pixels_are_not_dark() {
    // 95 white pixels plus 5 fully transparent ones: the transparent pixels
    // must not count toward the dark-pixel mass, or the 5% budget (exactly
    // 5.0 here) would strip the dark-text hint
    let mut pixels = vec![WHITE; 95];
    pixels.extend(vec![0x0000_0000u32; 5]);
    let buffer = PixelBuffer::new(10, 10, pixels).unwrap();
    let hints = compute_dark_hints(&buffer, 0.0);
    assert!(hints.contains(ColorHints::SUPPORTS_DARK_TEXT));
}

#[test]
fn test_dark_spots_defeat_dark_text() {
    // Bright image with a >5% mass of black pixels: mean stays high but the
    // dark-pixel cap strips the dark-text hint
    let mut pixels = vec![WHITE; 90];
    pixels.extend(vec![BLACK; 10]);
    let buffer = PixelBuffer::new(10, 10, pixels).unwrap();
    let hints = compute_dark_hints(&buffer, 0.0);
    assert!(!hints.contains(ColorHints::SUPPORTS_DARK_TEXT));
    assert!(!hints.contains(ColorHints::SUPPORTS_DARK_THEME));
}

#[test]
fn test_idempotent() {
    let buffer = solid_buffer(4, 4, argb(255, 30, 60, 90));
    assert_eq!(
        compute_dark_hints(&buffer, 0.25),
        compute_dark_hints(&buffer, 0.25)
    );
}
