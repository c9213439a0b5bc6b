//! Image decoding backend trait and shared error type.
//!
//! The [`ImageBackend`] trait is the single seam between the batch loop and
//! the codecs: given a path, produce a [`LumaGrid`]. The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend); tests
//! swap in a mock so the batch loop runs without real image files.

use super::luma::LumaGrid;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Image has no pixels: {}", .0.display())]
    Empty(PathBuf),
}

/// Trait for image decoding backends.
pub trait ImageBackend {
    /// Decode the image at `path` into a luminance grid.
    fn load_luma(&self, path: &Path) -> Result<LumaGrid, BackendError>;
}
