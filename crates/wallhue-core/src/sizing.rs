//! Analysis buffer size bounding
//!
//! Both analyzers assume a pre-bounded buffer; cost is linear in pixel count
//! with no internal chunking, so callers needing bounded latency downscale
//! to this budget first.

/// Maximum dimension the analyzers are calibrated for.
pub const MAX_ANALYSIS_DIMENSION: u32 = 112;

/// Maximum pixel area an analysis buffer may have.
///
/// Sizes are compared by area rather than per dimension, so the bound is
/// aspect-ratio independent.
pub const MAX_ANALYSIS_AREA: u32 = MAX_ANALYSIS_DIMENSION * MAX_ANALYSIS_DIMENSION;

/// Scale `width` x `height` down so the area stays within
/// [`MAX_ANALYSIS_AREA`], preserving aspect ratio.
///
/// When the requested area is within budget the size passes through
/// unchanged. Each resulting dimension is floored to 1.
pub fn optimal_size(width: u32, height: u32) -> (u32, u32) {
    let requested_area = width as u64 * height as u64;
    let mut scale = 1.0f64;
    if requested_area > MAX_ANALYSIS_AREA as u64 {
        scale = (MAX_ANALYSIS_AREA as f64 / requested_area as f64).sqrt();
    }

    let new_width = ((width as f64 * scale) as u32).max(1);
    let new_height = ((height as f64 * scale) as u32).max(1);
    (new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_passes_through() {
        assert_eq!(optimal_size(100, 50), (100, 50));
        assert_eq!(optimal_size(112, 112), (112, 112));
    }

    #[test]
    fn test_square_downscale_exact() {
        // 224^2 / 112^2 = 4, so the scale factor is exactly 0.5
        assert_eq!(optimal_size(224, 224), (112, 112));
        // 448^2 / 112^2 = 16, scale exactly 0.25
        assert_eq!(optimal_size(448, 448), (112, 112));
    }

    #[test]
    fn test_large_square_stays_within_area() {
        let (w, h) = optimal_size(1000, 1000);
        assert!(w * h <= MAX_ANALYSIS_AREA);
        // scale = sqrt(12544 / 1_000_000) ~ 0.112; truncation may land on
        // 111 or 112 depending on rounding of the square root
        assert!((111..=112).contains(&w));
        assert_eq!(w, h);
    }

    #[test]
    fn test_wide_image_preserves_aspect() {
        let (w, h) = optimal_size(4000, 1000);
        assert!(w as u64 * h as u64 <= MAX_ANALYSIS_AREA as u64);
        let ratio = w as f64 / h as f64;
        assert!((ratio - 4.0).abs() < 0.1, "ratio: {}", ratio);
    }

    #[test]
    fn test_degenerate_dimensions_clamp_to_one() {
        assert_eq!(optimal_size(1, 0), (1, 1));
        assert_eq!(optimal_size(0, 0), (1, 1));
        // Extremely tall: width would truncate to 0 without the clamp
        let (w, h) = optimal_size(1, 1_000_000);
        assert_eq!(w, 1);
        assert!(h >= 1);
    }
}
