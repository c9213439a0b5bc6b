//! Batch analysis of an image directory.
//!
//! For every file [`scan_images`] returns, in order:
//!
//! ```text
//! load_luma  →  compute_metrics  →  assess  →  on_report(&ImageReport)
//! ```
//!
//! Each image is finished (and handed to the caller) before the next one is
//! decoded. Nothing is aggregated across files.
//!
//! ## Decode Failures
//!
//! Governed by [`OnDecodeError`]:
//! - `Abort`: return [`BatchError::Decode`] immediately. Reports already
//!   handed to `on_report` stay delivered.
//! - `Skip`: log a warning, record a [`SkippedImage`], carry on.

use crate::advice::{Assessment, Thresholds, assess};
use crate::config::OnDecodeError;
use crate::imaging::{BackendError, ImageBackend};
use crate::metrics::{QualityMetrics, compute_metrics};
use crate::scan::{ScanError, scan_images};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Batch aborted at {file}")]
    Decode {
        file: String,
        #[source]
        source: BackendError,
    },
}

/// Settings for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub thresholds: Thresholds,
    pub on_decode_error: OnDecodeError,
}

/// Result for one analyzed image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageReport {
    /// File name without directory.
    pub file: String,
    pub metrics: QualityMetrics,
    pub assessment: Assessment,
}

/// An image left out because it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedImage {
    pub file: String,
    pub reason: String,
}

/// Everything a batch produced, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub images: Vec<ImageReport>,
    pub skipped: Vec<SkippedImage>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode, measure and assess a single image.
pub fn analyze_image(
    path: &Path,
    backend: &dyn ImageBackend,
    thresholds: &Thresholds,
) -> Result<ImageReport, BackendError> {
    let grid = backend.load_luma(path)?;
    let metrics = compute_metrics(&grid);
    let assessment = assess(&metrics, thresholds);
    Ok(ImageReport {
        file: file_name(path),
        metrics,
        assessment,
    })
}

/// Analyze every image in `dir`, calling `on_report` as each one completes.
pub fn run_batch(
    dir: &Path,
    options: &BatchOptions,
    backend: &dyn ImageBackend,
    mut on_report: impl FnMut(&ImageReport),
) -> Result<BatchReport, BatchError> {
    let paths = scan_images(dir)?;
    log::info!("analyzing {} image(s) in {}", paths.len(), dir.display());
    if paths.is_empty() {
        log::info!("no .png/.jpg/.jpeg files found in {}", dir.display());
    }

    let mut report = BatchReport::default();
    for path in &paths {
        match analyze_image(path, backend, &options.thresholds) {
            Ok(image) => {
                on_report(&image);
                report.images.push(image);
            }
            Err(source) => match options.on_decode_error {
                OnDecodeError::Abort => {
                    return Err(BatchError::Decode {
                        file: file_name(path),
                        source,
                    });
                }
                OnDecodeError::Skip => {
                    log::warn!("skipping {}: {}", path.display(), source);
                    report.skipped.push(SkippedImage {
                        file: file_name(path),
                        reason: source.to_string(),
                    });
                }
            },
        }
    }

    log::info!(
        "analyzed {} image(s), skipped {}",
        report.images.len(),
        report.skipped.len()
    );
    Ok(report)
}
