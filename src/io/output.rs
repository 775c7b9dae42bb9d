//! Output path resolution and canvas persistence

use crate::io::configuration::{ADAPTIVE_OUTPUT_NAME, FIXED_OUTPUT_NAME};
use crate::io::error::{CollageError, Result};
use crate::layout::LayoutMode;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Default output location for a layout mode, inside the scanned directory
pub fn default_output_path(source: &Path, mode: LayoutMode) -> PathBuf {
    let name = match mode {
        LayoutMode::Fixed => FIXED_OUTPUT_NAME,
        LayoutMode::Adaptive => ADAPTIVE_OUTPUT_NAME,
    };
    source.join(name)
}

/// Save the finished canvas, creating parent directories as needed
///
/// The encoder is chosen from the file extension. An unsupported
/// extension fails before any file is created, so a failed save never
/// leaves a partial collage behind.
///
/// # Errors
///
/// Returns an error if:
/// - the parent directory cannot be created
/// - the canvas cannot be encoded or written to `path`
pub fn save_collage(canvas: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas.save(path).map_err(|e| CollageError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
