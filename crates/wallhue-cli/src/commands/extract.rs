use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use wallhue_cli::{expand_inputs, load_pixel_buffer, quantizer_for, ExtractReport, SUPPORTED_EXTENSIONS};
use wallhue_core::{ImageColors, Quantizer};

/// Execute the extract command over one or more images.
///
/// Inputs are expanded, decoded in parallel, bounded to the analysis area,
/// quantized with the configured budget, and run through the engine. Output
/// is human-readable text or JSON, optionally written to a file.
#[allow(clippy::too_many_arguments)]
pub fn cmd_extract(
    inputs: Vec<PathBuf>,
    recursive: bool,
    dim: Option<f32>,
    budget: Option<String>,
    config_path: Option<PathBuf>,
    json: bool,
    out: Option<PathBuf>,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start = Instant::now();

    // Set verbose mode for the core library
    wallhue_core::config::set_verbose(verbose);

    let handle = wallhue_core::config::load_config(config_path.as_deref());
    if verbose {
        wallhue_core::config::log_config_usage(&handle);
    }
    let mut config = handle.config;
    if let Some(dim) = dim {
        config.dim_amount = dim;
    }
    if let Some(budget) = budget {
        config.budget = budget.parse()?;
    }
    let config = config.sanitize();

    if inputs.is_empty() {
        return Err("No input files or directories specified".to_string());
    }

    // Expand directories to file lists
    let inputs = expand_inputs(&inputs, recursive)?;
    if inputs.is_empty() {
        return Err(format!(
            "No supported image files found (supported: {})",
            SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    if !silent && inputs.len() > 1 {
        println!("Found {} image files to process", inputs.len());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    let quantizer = quantizer_for(config.budget);
    let failures = AtomicUsize::new(0);

    let mut reports: Vec<ExtractReport> = inputs
        .par_iter()
        .filter_map(|input| {
            match extract_single(input, config.dim_amount, quantizer.as_ref()) {
                Ok(report) => Some(report),
                Err(err) => {
                    eprintln!("{}: {}", input.display(), err);
                    failures.fetch_add(1, Ordering::SeqCst);
                    None
                }
            }
        })
        .collect();
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    if json {
        let rendered = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])
        } else {
            serde_json::to_string_pretty(&reports)
        }
        .map_err(|e| format!("Failed to serialize results: {}", e))?;

        match &out {
            Some(path) => std::fs::write(path, rendered)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
            None => println!("{}", rendered),
        }
    } else {
        for report in &reports {
            report.print_human();
        }
        if !silent && inputs.len() > 1 {
            println!(
                "\nProcessed {} images in {:.2}s ({} failed)",
                reports.len(),
                start.elapsed().as_secs_f32(),
                failures.load(Ordering::SeqCst)
            );
        }
    }

    let failed = failures.load(Ordering::SeqCst);
    if failed > 0 {
        return Err(format!("{} image(s) failed", failed));
    }
    Ok(())
}

fn extract_single<Q: Quantizer + ?Sized>(
    input: &Path,
    dim_amount: f32,
    quantizer: &Q,
) -> Result<ExtractReport, String> {
    let pixels = load_pixel_buffer(input)?;
    let colors = ImageColors::from_pixels(&pixels, dim_amount, quantizer);
    Ok(ExtractReport::new(
        input,
        [pixels.width(), pixels.height()],
        &colors,
    ))
}
