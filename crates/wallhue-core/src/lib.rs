//! Wallhue Core Library
//!
//! Extracts up to three visually representative seed colors from a wallpaper
//! and derives dark-text / dark-theme presentation hints for UI overlays.

pub mod color;
pub mod config;
pub mod error;
pub mod histogram;
pub mod hints;
pub mod models;
pub mod seeds;
pub mod sizing;

// Re-export commonly used types
pub use color::{Lab, Lch};
pub use error::ExtractionError;
pub use histogram::{ColorHistogram, Quantizer, QuantizerBudget};
pub use hints::compute_dark_hints;
pub use models::{ColorHints, ImageColors, PixelBuffer};
pub use seeds::select_seeds;
pub use sizing::optimal_size;
