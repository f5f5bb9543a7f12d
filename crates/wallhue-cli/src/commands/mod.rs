//! Command implementations for the wallhue CLI.

mod extract;
mod hints;

// Re-export all command functions
pub use extract::cmd_extract;
pub use hints::cmd_hints;
