use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

mod commands;

use commands::{cmd_extract, cmd_hints};

#[derive(Parser)]
#[command(name = "wallhue")]
#[command(version, about = "Wallpaper color extraction and presentation hints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract seed colors and dark hints from image(s)
    Extract {
        /// Input files or directories
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Simulated wallpaper dim amount (0.0 - 1.0)
        #[arg(long, value_name = "AMOUNT")]
        dim: Option<f32>,

        /// Quantization budget: "fast" or "high-quality"
        #[arg(long, value_name = "BUDGET")]
        budget: Option<String>,

        /// Extraction config file (default: wallhue.yml in the working dir)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Write JSON output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Number of worker threads for batch processing
        #[arg(long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Print verbose diagnostics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute only the dark-text / dark-theme hints for an image
    Hints {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Simulated wallpaper dim amount (0.0 - 1.0)
        #[arg(long, value_name = "AMOUNT", default_value = "0.0")]
        dim: f32,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Print verbose diagnostics
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            inputs,
            recursive,
            dim,
            budget,
            config,
            json,
            out,
            threads,
            silent,
            verbose,
        } => cmd_extract(
            inputs, recursive, dim, budget, config, json, out, threads, silent, verbose,
        ),
        Commands::Hints {
            input,
            dim,
            json,
            verbose,
        } => cmd_hints(input, dim, json, verbose),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
