//! Shared utilities for wallhue-cli
//!
//! Input expansion, image loading, the quantizer implementations that feed
//! the core engine, and report structures for output.

pub mod output;
pub mod processing;
pub mod quantize;

// Re-export commonly used items at the crate root for convenience
pub use output::{hex, ExtractReport, HintsReport, SeedColors};
pub use processing::{expand_inputs, load_pixel_buffer, SUPPORTED_EXTENSIONS};
pub use quantize::{quantizer_for, BucketQuantizer, ExactQuantizer};
