//! Result aggregate and input buffer types
//!
//! [`ImageColors`] is the immutable result of one extraction pass: the
//! ordered seed colors, the full histogram, and the hint bitmask. A fresh
//! computation always yields a fresh object; nothing is mutated after
//! construction.


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{argb_to_lab, rgb24};
use crate::error::ExtractionError;
use crate::histogram::{ColorHistogram, Quantizer};
use crate::hints::{compute_dark_hints, DARK_THEME_MEAN_LUMINANCE};
use crate::seeds::select_seeds;

/// Bit flags describing how UI overlays should present over an image.
///
/// Bit positions are a stable contract; consumers test individual bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorHints(u32);

impl ColorHints {
    /// Dark text is preferred over the image for best presentation.
    ///
    /// eg. a launcher may set its text color to black when this is set.
    pub const SUPPORTS_DARK_TEXT: ColorHints = ColorHints(1 << 0);

    /// A dark theme is preferred over the image for best presentation.
    pub const SUPPORTS_DARK_THEME: ColorHints = ColorHints(1 << 1);

    /// The hints were derived from raw pixel analysis rather than supplied
    /// by the caller.
    pub const FROM_PIXELS: ColorHints = ColorHints(1 << 2);

    pub const fn empty() -> Self {
        ColorHints(0)
    }

    /// Raw bitmask value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        ColorHints(bits)
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: ColorHints) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ColorHints {
    type Output = ColorHints;

    fn bitor(self, rhs: ColorHints) -> ColorHints {
        ColorHints(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ColorHints {
    fn bitor_assign(&mut self, rhs: ColorHints) {
        self.0 |= rhs.0;
    }
}

/// Pre-bounded buffer of packed ARGB pixels.
///
/// Row-major, `width * height` entries. Analyzers assume the buffer was
/// bounded with [`optimal_size`](crate::sizing::optimal_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Wrap a pixel vector, validating it against the stated dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, ExtractionError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ExtractionError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// The most visually representative colors of an image, with presentation
/// hints.
///
/// Exposes up to three seed colors ([`primary`](Self::primary),
/// [`secondary`](Self::secondary), [`tertiary`](Self::tertiary)) in
/// selection order, the full color histogram they were chosen from, and the
/// combined [`ColorHints`] bitmask. Equality and hashing are structural over
/// all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageColors {
    main_colors: Vec<u32>,
    all_colors: ColorHistogram,
    hints: ColorHints,
}

impl ImageColors {
    /// Construct from one to three explicitly supplied colors.
    ///
    /// Histogram populations default to zero. Dark-theme support is derived
    /// from the primary color's L*; no other hints are computed.
    pub fn from_colors(
        primary: u32,
        secondary: Option<u32>,
        tertiary: Option<u32>,
    ) -> Result<Self, ExtractionError> {
        let mut colors = Self::from_colors_with_hints(
            primary,
            secondary,
            tertiary,
            ColorHints::empty(),
        )?;
        if argb_to_lab(primary).l < DARK_THEME_MEAN_LUMINANCE {
            colors.hints |= ColorHints::SUPPORTS_DARK_THEME;
        }
        Ok(colors)
    }

    /// Construct from explicitly supplied colors and hints.
    ///
    /// The hints are passed through untouched. Fails when a tertiary color
    /// is supplied without a secondary.
    pub fn from_colors_with_hints(
        primary: u32,
        secondary: Option<u32>,
        tertiary: Option<u32>,
        hints: ColorHints,
    ) -> Result<Self, ExtractionError> {
        if tertiary.is_some() && secondary.is_none() {
            return Err(ExtractionError::TertiaryWithoutSecondary);
        }

        let mut main_colors = Vec::with_capacity(3);
        let mut all_colors = ColorHistogram::new();
        main_colors.push(rgb24(primary));
        all_colors.add(primary, 0);
        if let Some(secondary) = secondary {
            main_colors.push(rgb24(secondary));
            all_colors.add(secondary, 0);
        }
        if let Some(tertiary) = tertiary {
            main_colors.push(rgb24(tertiary));
            all_colors.add(tertiary, 0);
        }

        Ok(Self {
            main_colors,
            all_colors,
            hints,
        })
    }

    /// Construct from an externally quantized histogram.
    ///
    /// Runs seed selection; the hints are passed through untouched.
    pub fn from_histogram(histogram: ColorHistogram, hints: ColorHints) -> Self {
        let main_colors = select_seeds(&histogram);
        Self {
            main_colors,
            all_colors: histogram,
            hints,
        }
    }

    /// Construct from a raw pixel buffer.
    ///
    /// The supplied quantizer produces the histogram, seed selection runs on
    /// it, and the dark hints are computed from the pixels with the given
    /// dim amount. The result carries the [`ColorHints::FROM_PIXELS`]
    /// provenance bit.
    pub fn from_pixels<Q: Quantizer + ?Sized>(
        pixels: &PixelBuffer,
        dim_amount: f32,
        quantizer: &Q,
    ) -> Self {
        let histogram = quantizer.quantize(pixels);
        let hints = compute_dark_hints(pixels, dim_amount) | ColorHints::FROM_PIXELS;
        Self::from_histogram(histogram, hints)
    }

    /// The most visually representative color, when one exists.
    pub fn primary(&self) -> Option<u32> {
        self.main_colors.first().copied()
    }

    /// The second most preeminent color.
    pub fn secondary(&self) -> Option<u32> {
        self.main_colors.get(1).copied()
    }

    /// The third most preeminent color.
    pub fn tertiary(&self) -> Option<u32> {
        self.main_colors.get(2).copied()
    }

    /// Seed colors in selection order, most important first.
    pub fn main_colors(&self) -> &[u32] {
        &self.main_colors
    }

    /// The full color -> population histogram.
    pub fn all_colors(&self) -> &ColorHistogram {
        &self.all_colors
    }

    pub fn hints(&self) -> ColorHints {
        self.hints
    }
}

impl fmt::Display for ImageColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ImageColors:")?;
        for color in &self.main_colors {
            write!(f, " #{:06x}", color)?;
        }
        write!(f, " h: {}]", self.hints.bits())
    }
}
