//! Color histogram: the quantizer output contract
//!
//! Quantizer internals live outside the engine; the engine consumes only a
//! color -> population mapping.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::rgb24;
use crate::models::PixelBuffer;

/// Mapping from a 24-bit RGB color to a population count.
///
/// Backed by an ordered map so iteration, equality, and hashing are
/// deterministic. Keys are normalized to their low 24 bits on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorHistogram {
    counts: BTreeMap<u32, u32>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `population` occurrences of `color`. Alpha bits are dropped.
    pub fn add(&mut self, color: u32, population: u32) {
        *self.counts.entry(rgb24(color)).or_insert(0) += population;
    }

    /// Population of `color`, or 0 when the color is absent.
    pub fn population(&self, color: u32) -> u32 {
        self.counts.get(&rgb24(color)).copied().unwrap_or(0)
    }

    /// Sum of all populations.
    pub fn total_population(&self) -> u64 {
        self.counts.values().map(|&p| p as u64).sum()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (color, population) pairs in ascending color order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&color, &population)| (color, population))
    }
}

impl FromIterator<(u32, u32)> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (color, population) in iter {
            histogram.add(color, population);
        }
        histogram
    }
}

/// Produces a color histogram from a pixel buffer.
///
/// Implementations are external collaborators; the buffer they receive is
/// expected to be pre-bounded with [`optimal_size`](crate::sizing::optimal_size)
/// since extraction cost is linear in pixel count.
pub trait Quantizer {
    fn quantize(&self, pixels: &PixelBuffer) -> ColorHistogram;
}

/// Quantization budget selecting between a cheap and a thorough quantizer.
///
/// An explicit parameter rather than a device-class query, so callers on
/// constrained hardware opt into the cheap path themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantizerBudget {
    /// Coarse but cheap quantization.
    Fast,

    /// Thorough quantization.
    #[default]
    HighQuality,
}

impl QuantizerBudget {
    /// Get the budget name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fast => "fast",
            Self::HighQuality => "high-quality",
        }
    }
}

impl FromStr for QuantizerBudget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "low" => Ok(Self::Fast),
            "high-quality" | "high" | "quality" => Ok(Self::HighQuality),
            _ => Err(format!("Unknown quantizer budget: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_and_strips_alpha() {
        let mut histogram = ColorHistogram::new();
        histogram.add(0xFF12_3456, 3);
        histogram.add(0x0012_3456, 2);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.population(0x0012_3456), 5);
        assert_eq!(histogram.total_population(), 5);
    }

    #[test]
    fn test_iter_ascending_color_order() {
        let histogram: ColorHistogram =
            [(0x00FF_0000u32, 1u32), (0x0000_00FFu32, 2u32), (0x0000_FF00u32, 3u32)]
                .into_iter()
                .collect();
        let colors: Vec<u32> = histogram.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![0x0000_00FF, 0x0000_FF00, 0x00FF_0000]);
    }

    #[test]
    fn test_missing_color_has_zero_population() {
        let histogram = ColorHistogram::new();
        assert_eq!(histogram.population(0x0012_3456), 0);
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_population(), 0);
    }

    #[test]
    fn test_budget_from_str() {
        assert_eq!("fast".parse::<QuantizerBudget>(), Ok(QuantizerBudget::Fast));
        assert_eq!(
            "High-Quality".parse::<QuantizerBudget>(),
            Ok(QuantizerBudget::HighQuality)
        );
        assert_eq!(
            "quality".parse::<QuantizerBudget>(),
            Ok(QuantizerBudget::HighQuality)
        );
        assert!("best".parse::<QuantizerBudget>().is_err());
    }

    #[test]
    fn test_budget_default() {
        assert_eq!(QuantizerBudget::default(), QuantizerBudget::HighQuality);
    }
}
