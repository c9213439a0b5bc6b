//! Image discovery.
//!
//! Lists one directory (not recursive) and keeps the regular files whose name
//! ends in `.png`, `.jpg` or `.jpeg`, compared case-insensitively. Everything
//! else (`readme.txt`, subdirectories, sidecars) is skipped without comment.
//!
//! The result is sorted by file name so reports come out in the same order
//! on every platform.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read image directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name suffixes (lowercase, with the dot) treated as images.
pub const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Whether a file name carries one of the [`IMAGE_SUFFIXES`].
pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// List the image files directly inside `dir`, sorted by file name.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if path.is_file() && is_image_name(&name) {
            images.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}
