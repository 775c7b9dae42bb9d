//! Recursive discovery and decoding of source images

use crate::io::error::{CollageError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lowercase extension filters and strip leading dots
///
/// Accepts user input like `.JPG` or `Png` and reduces it to the bare
/// lowercase form used for matching. Empty entries are dropped.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Collect every matching image path under `root`, including subdirectories
///
/// The walk is depth first with siblings visited in file-name order, so
/// an unchanged tree always yields the same sequence and therefore the
/// same collage. Extension matching is case-insensitive.
///
/// # Errors
///
/// Returns an error if:
/// - a directory or file cannot be read during traversal
/// - no file under `root` matches any accepted extension
pub fn collect_paths(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_file() && matches_extension(entry.path(), extensions) {
            paths.push(entry.into_path());
        }
    }

    if paths.is_empty() {
        return Err(CollageError::NoImagesFound {
            root: root.to_path_buf(),
        });
    }

    Ok(paths)
}

/// Decode one image file and flatten it to 8-bit RGB
///
/// # Errors
///
/// Returns [`CollageError::ImageLoad`] when the file cannot be opened
/// or decoded.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.to_rgb8())
}

/// Discover and decode every matching image under `root`
///
/// Convenience composition of [`collect_paths`] and [`load_image`] for
/// callers that do not track per-file progress.
///
/// # Errors
///
/// Returns an error if discovery fails, nothing matches, or any file
/// fails to decode.
pub fn collect_images(root: &Path, extensions: &[String]) -> Result<Vec<RgbImage>> {
    collect_paths(root, extensions)?
        .into_iter()
        .map(|path| load_image(&path))
        .collect()
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            extensions.iter().any(|accepted| *accepted == lowered)
        })
}

fn walk_error(root: &Path, error: walkdir::Error) -> CollageError {
    let path = error
        .path()
        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    CollageError::FileSystem {
        path,
        operation: "walk directory",
        source: error
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("walk aborted")),
    }
}
