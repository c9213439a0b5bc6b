//! Shared test utilities: synthetic image fixtures and common grids.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_gray_png(tmp.path(), "flat.png", 100, 100, |_, _| 128);
//! write_text(tmp.path(), "readme.txt", "not an image");
//! ```

use crate::imaging::LumaGrid;
use image::{GrayImage, Rgb, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture files
// =========================================================================

/// Write an 8-bit grayscale PNG whose pixels are `f(x, y)`.
pub fn write_gray_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> u8,
) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_fn(width, height, |x, y| image::Luma([f(x, y)]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Write a flat-colour RGB JPEG.
pub fn write_rgb_jpeg(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Write an arbitrary text file (non-image fixture).
pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// Grids with known metrics
// =========================================================================

/// Checkerboard of `block`-pixel squares alternating `dark` and `light`.
pub fn checkerboard(size: usize, block: usize, dark: u8, light: u8) -> LumaGrid {
    LumaGrid::from_fn(size, size, |x, y| {
        if (x / block + y / block) % 2 == 0 {
            dark
        } else {
            light
        }
    })
}

/// A well-exposed, sharp, clean grid: every metric inside the ideal range.
///
/// 64×64, left half 20 and right half 240 with one hard vertical edge:
/// brightness 130, contrast 110, sharpness 1512.5. The blur residual only
/// touches the four columns around the edge, so noise stays near 38.4.
pub fn ideal_grid() -> LumaGrid {
    LumaGrid::from_fn(64, 64, |x, _| if x < 32 { 20 } else { 240 })
}

/// 1-px 0/255 checkerboard: brightness 127.5, contrast 127.5,
/// Laplacian ±1020 everywhere, blurred to a flat 128.
pub fn pixel_checkerboard(size: usize) -> LumaGrid {
    checkerboard(size, 1, 0, 255)
}
