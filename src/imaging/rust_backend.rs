//! Pure Rust decoding backend built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Open + sniff format | `image::ImageReader::open` + `with_guessed_format` |
//! | Decode (PNG, JPEG) | `image` crate pure Rust decoders |
//! | Luminance | [`LumaGrid::from_image`] |
//!
//! The format is sniffed from the file's magic bytes, so a PNG saved with a
//! `.jpg` name still decodes.

use super::backend::{BackendError, ImageBackend};
use super::luma::LumaGrid;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

impl ImageBackend for RustBackend {
    fn load_luma(&self, path: &Path) -> Result<LumaGrid, BackendError> {
        let img = load_image(path)?;
        log::debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        LumaGrid::from_image(&img).ok_or_else(|| BackendError::Empty(path.to_path_buf()))
    }
}
