//! Error types for color extraction

use thiserror::Error;

/// Errors raised at construction time.
///
/// No other error classes exist: numeric edge cases (zero total population,
/// empty histograms, empty buffers) degrade to empty results instead of
/// failing, and out-of-range dim amounts are saturated rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// A tertiary color was supplied without a secondary color.
    #[error("tertiary color can't be specified when secondary color is missing")]
    TertiaryWithoutSecondary,

    /// A pixel buffer's length does not match its stated dimensions.
    #[error("pixel buffer holds {actual} pixels, dimensions require {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
