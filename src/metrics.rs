//! Quality metrics of a luminance grid.
//!
//! | Metric | Definition |
//! |---|---|
//! | brightness | mean luminance |
//! | contrast | population standard deviation of luminance |
//! | sharpness | population variance of the Laplacian |
//! | noise | population standard deviation of `original - gaussian_blur_5x5(original)`, in 8-bit wrapping arithmetic |
//!
//! A constant grid scores 0 on contrast, sharpness and noise.

use crate::imaging::LumaGrid;
use crate::imaging::calculations::{mean, std_dev, variance};
use crate::imaging::filters::{gaussian_blur_5x5, laplacian};
use serde::Serialize;

/// The four numbers every recommendation is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub brightness: f64,
    pub contrast: f64,
    pub sharpness: f64,
    pub noise: f64,
}

pub fn compute_metrics(grid: &LumaGrid) -> QualityMetrics {
    let luma = grid.to_f64();
    QualityMetrics {
        brightness: mean(&luma),
        contrast: std_dev(&luma),
        sharpness: sharpness(grid),
        noise: noise(grid),
    }
}

/// Variance of the Laplacian. Blurry images have few strong second
/// derivatives and score low.
pub fn sharpness(grid: &LumaGrid) -> f64 {
    variance(&laplacian(grid))
}

/// Spread of the high-frequency residual left after a 5×5 Gaussian blur.
///
/// The subtraction wraps modulo 256, so a pixel darker than its blurred
/// neighbourhood contributes a large sample (`20 - 34` becomes `242`).
pub fn noise(grid: &LumaGrid) -> f64 {
    let blurred = gaussian_blur_5x5(grid);
    let residual: Vec<f64> = grid
        .pixels()
        .iter()
        .zip(blurred.pixels())
        .map(|(&orig, &smooth)| f64::from(orig.wrapping_sub(smooth)))
        .collect();
    std_dev(&residual)
}
