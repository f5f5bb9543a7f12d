//! Extraction configuration management.
//!
//! Provides the global verbose flag and optional on-disk defaults for the
//! dim amount and quantization budget.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

use crate::histogram::QuantizerBudget;

// Global verbose flag for controlling diagnostic output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, diagnostic messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names searched in the working
/// directory.
const CONFIG_FILENAMES: &[&str] = &["wallhue.yml", "wallhue.yaml"];

/// Extraction defaults, loadable from disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Simulated dim level applied before luminance analysis (0.0 - 1.0).
    pub dim_amount: f32,

    /// Quantization budget for pixel-buffer extraction.
    pub budget: QuantizerBudget,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dim_amount: 0.0,
            budget: QuantizerBudget::HighQuality,
        }
    }
}

impl ExtractionConfig {
    /// Saturate out-of-range values instead of rejecting them.
    pub fn sanitize(mut self) -> Self {
        self.dim_amount = self.dim_amount.clamp(0.0, 1.0);
        self
    }
}

/// Loaded configuration together with its source path and any warnings.
pub struct ConfigHandle {
    pub config: ExtractionConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Falls back to built-in defaults when no file is found; read and parse
/// failures are reported through `warnings` rather than failing extraction.
pub fn load_config(forced_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    let candidate = match forced_path {
        Some(path) => Some(path.to_path_buf()),
        None => CONFIG_FILENAMES.iter().map(PathBuf::from).find(|p| p.exists()),
    };

    if let Some(path) = candidate {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_yaml::from_str::<ExtractionConfig>(&contents) {
                Ok(config) => {
                    return ConfigHandle {
                        config: config.sanitize(),
                        source: Some(path),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!("Failed to parse {}: {}", path.display(), err)),
            },
            Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
        }
    }

    ConfigHandle {
        config: ExtractionConfig::default(),
        source: None,
        warnings,
    }
}

/// Report where configuration came from, plus any warnings.
pub fn log_config_usage(handle: &ConfigHandle) {
    match &handle.source {
        Some(source) => eprintln!("[wallhue] Loaded extraction config from {}", source.display()),
        None => eprintln!("[wallhue] Using built-in extraction defaults"),
    }
    for warning in &handle.warnings {
        eprintln!("[wallhue] Config warning: {}", warning);
    }
}
