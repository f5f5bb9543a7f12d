//! Report structures and printing for extraction results.

use std::path::Path;

use serde::Serialize;
use wallhue_core::{ColorHints, ImageColors};

/// Extraction result for a single image, serializable to JSON.
#[derive(Serialize)]
pub struct ExtractReport {
    pub file: String,
    pub dimensions: [u32; 2],
    pub colors: SeedColors,
    pub hints: HintsReport,
    pub distinct_colors: usize,
}

/// Seed colors as hex strings, in selection order.
#[derive(Serialize)]
pub struct SeedColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<String>,
}

/// Hint bits, unpacked for readability alongside the raw bitmask.
#[derive(Serialize)]
pub struct HintsReport {
    pub supports_dark_text: bool,
    pub supports_dark_theme: bool,
    pub from_pixels: bool,
    pub bits: u32,
}

impl HintsReport {
    pub fn from_hints(hints: ColorHints) -> Self {
        Self {
            supports_dark_text: hints.contains(ColorHints::SUPPORTS_DARK_TEXT),
            supports_dark_theme: hints.contains(ColorHints::SUPPORTS_DARK_THEME),
            from_pixels: hints.contains(ColorHints::FROM_PIXELS),
            bits: hints.bits(),
        }
    }
}

/// Format a 24-bit color as a `#rrggbb` hex string.
pub fn hex(color: u32) -> String {
    format!("#{:06x}", color & 0x00FF_FFFF)
}

impl ExtractReport {
    pub fn new(file: &Path, dimensions: [u32; 2], colors: &ImageColors) -> Self {
        Self {
            file: file.display().to_string(),
            dimensions,
            colors: SeedColors {
                primary: colors.primary().map(hex),
                secondary: colors.secondary().map(hex),
                tertiary: colors.tertiary().map(hex),
            },
            hints: HintsReport::from_hints(colors.hints()),
            distinct_colors: colors.all_colors().len(),
        }
    }

    /// Human-readable output for one image.
    pub fn print_human(&self) {
        println!("{} ({}x{})", self.file, self.dimensions[0], self.dimensions[1]);
        if let Some(primary) = &self.colors.primary {
            println!("  Primary:   {}", primary);
        }
        if let Some(secondary) = &self.colors.secondary {
            println!("  Secondary: {}", secondary);
        }
        if let Some(tertiary) = &self.colors.tertiary {
            println!("  Tertiary:  {}", tertiary);
        }
        println!(
            "  Hints: dark text: {}, dark theme: {} (bits: {})",
            self.hints.supports_dark_text, self.hints.supports_dark_theme, self.hints.bits
        );
        println!("  Distinct colors: {}", self.distinct_colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(hex(0x00FF_0000), "#ff0000");
        assert_eq!(hex(0xFF12_AB34), "#12ab34");
        assert_eq!(hex(0), "#000000");
    }

    #[test]
    fn test_hints_report_unpacks_bits() {
        let hints = ColorHints::SUPPORTS_DARK_THEME | ColorHints::FROM_PIXELS;
        let report = HintsReport::from_hints(hints);
        assert!(!report.supports_dark_text);
        assert!(report.supports_dark_theme);
        assert!(report.from_pixels);
        assert_eq!(report.bits, 6);
    }
}
