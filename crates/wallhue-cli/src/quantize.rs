//! Quantizers feeding the core engine.
//!
//! The engine defines only the quantizer output contract; these two
//! implementations cover the fast and high-quality budgets for buffers
//! already bounded to the analysis area. Fully transparent pixels are
//! skipped by both.

use wallhue_core::color::{alpha, blue, green, red};
use wallhue_core::{ColorHistogram, PixelBuffer, Quantizer, QuantizerBudget};

/// Exact per-color counting.
///
/// Valid as a "quantizer" because the buffer is pre-bounded to the analysis
/// area: at most 12544 pixels means at most 12544 distinct colors.
pub struct ExactQuantizer;

impl Quantizer for ExactQuantizer {
    fn quantize(&self, pixels: &PixelBuffer) -> ColorHistogram {
        let mut histogram = ColorHistogram::new();
        for &pixel in pixels.pixels() {
            if alpha(pixel) == 0 {
                continue;
            }
            histogram.add(pixel, 1);
        }
        histogram
    }
}

/// 5-bit-per-channel bucket quantizer (32^3 buckets).
///
/// Coarse but cheap: similar colors collapse into one bucket, whose center
/// is reported as the representative color.
pub struct BucketQuantizer;

impl Quantizer for BucketQuantizer {
    fn quantize(&self, pixels: &PixelBuffer) -> ColorHistogram {
        let mut buckets = vec![0u32; 32 * 32 * 32];
        for &pixel in pixels.pixels() {
            if alpha(pixel) == 0 {
                continue;
            }
            let ri = (red(pixel) >> 3) as usize;
            let gi = (green(pixel) >> 3) as usize;
            let bi = (blue(pixel) >> 3) as usize;
            buckets[(ri << 10) | (gi << 5) | bi] += 1;
        }

        let mut histogram = ColorHistogram::new();
        for (index, &count) in buckets.iter().enumerate() {
            if count == 0 {
                continue;
            }
            // Widen the 5-bit bucket index back to an 8-bit channel value
            let to_8 = |v: u32| ((v << 3) | (v >> 2)) as u8;
            let r = to_8((index >> 10) as u32 & 31);
            let g = to_8((index >> 5) as u32 & 31);
            let b = to_8(index as u32 & 31);
            histogram.add(u32::from_be_bytes([0xFF, r, g, b]), count);
        }
        histogram
    }
}

/// Pick the quantizer implementation for a budget.
pub fn quantizer_for(budget: QuantizerBudget) -> Box<dyn Quantizer + Send + Sync> {
    match budget {
        QuantizerBudget::Fast => Box::new(BucketQuantizer),
        QuantizerBudget::HighQuality => Box::new(ExactQuantizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(pixels: Vec<u32>) -> PixelBuffer {
        let len = pixels.len() as u32;
        PixelBuffer::new(len, 1, pixels).unwrap()
    }

    #[test]
    fn test_exact_counts_distinct_colors() {
        let buffer = buffer(vec![0xFFFF_0000, 0xFFFF_0000, 0xFF00_FF00]);
        let histogram = ExactQuantizer.quantize(&buffer);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.population(0x00FF_0000), 2);
        assert_eq!(histogram.population(0x0000_FF00), 1);
    }

    #[test]
    fn test_exact_skips_transparent_pixels() {
        let buffer = buffer(vec![0xFFFF_0000, 0x00FF_0000]);
        let histogram = ExactQuantizer.quantize(&buffer);
        assert_eq!(histogram.total_population(), 1);
    }

    #[test]
    fn test_bucket_population_sums_to_opaque_pixels() {
        let buffer = buffer(vec![
            0xFF10_2030,
            0xFF11_2131,
            0xFF80_8080,
            0x0000_0000,
        ]);
        let histogram = BucketQuantizer.quantize(&buffer);
        assert_eq!(histogram.total_population(), 3);
    }

    #[test]
    fn test_bucket_merges_near_colors() {
        // 0x102030 and 0x112131 share every 5-bit bucket index
        let buffer = buffer(vec![0xFF10_2030, 0xFF11_2131]);
        let histogram = BucketQuantizer.quantize(&buffer);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.total_population(), 2);
    }

    #[test]
    fn test_bucket_center_widening() {
        // A pure white pixel lands in the top bucket, which widens back to
        // exactly 0xFFFFFF
        let buffer = buffer(vec![0xFFFF_FFFF]);
        let histogram = BucketQuantizer.quantize(&buffer);
        assert_eq!(histogram.population(0x00FF_FFFF), 1);
    }

    #[test]
    fn test_budget_selection() {
        let buffer = buffer(vec![0xFF10_2030, 0xFF11_2131]);
        let fast = quantizer_for(QuantizerBudget::Fast).quantize(&buffer);
        let exact = quantizer_for(QuantizerBudget::HighQuality).quantize(&buffer);
        assert_eq!(fast.len(), 1);
        assert_eq!(exact.len(), 2);
    }
}
