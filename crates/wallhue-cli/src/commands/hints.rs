use std::path::PathBuf;

use wallhue_cli::{load_pixel_buffer, HintsReport};
use wallhue_core::compute_dark_hints;

/// Execute the hints command: only the dark-hint sweep, no seed selection.
pub fn cmd_hints(input: PathBuf, dim: f32, json: bool, verbose: bool) -> Result<(), String> {
    wallhue_core::config::set_verbose(verbose);

    let pixels = load_pixel_buffer(&input)?;
    let hints = compute_dark_hints(&pixels, dim);
    let report = HintsReport::from_hints(hints);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize hints: {}", e))?;
        println!("{}", rendered);
    } else {
        println!("Analyzing: {}\n", input.display());
        println!("  Dark text:  {}", report.supports_dark_text);
        println!("  Dark theme: {}", report.supports_dark_theme);
    }

    Ok(())
}
