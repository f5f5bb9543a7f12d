//! Input file handling and image loading.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use wallhue_core::{optimal_size, PixelBuffer};

/// Supported image extensions for extraction
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is true,
/// subdirectories are also scanned. The result is sorted for consistent
/// ordering.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    files.sort();
    Ok(files)
}

fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if is_supported(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode an image, bound it to the analysis area, and pack it as ARGB.
///
/// Downscaling uses a triangle filter; the target size comes from the core's
/// area bound so analysis cost stays fixed regardless of source resolution.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;
    let mut rgba = img.to_rgba8();

    let (width, height) = rgba.dimensions();
    let (target_width, target_height) = optimal_size(width, height);
    if (target_width, target_height) != (width, height) {
        rgba = imageops::resize(&rgba, target_width, target_height, FilterType::Triangle);
    }

    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            u32::from_be_bytes([a, r, g, b])
        })
        .collect();

    PixelBuffer::new(target_width, target_height, pixels).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_filter() {
        assert!(is_supported(Path::new("wall.png")));
        assert!(is_supported(Path::new("wall.JPG")));
        assert!(!is_supported(Path::new("wall.txt")));
        assert!(!is_supported(Path::new("wall")));
    }

    #[test]
    fn test_expand_missing_path_fails() {
        let missing = PathBuf::from("definitely/not/a/real/path.png");
        assert!(expand_inputs(&[missing], false).is_err());
    }
}
