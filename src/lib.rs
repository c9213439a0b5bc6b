//! # Image Advisor
//!
//! Diagnoses the technical quality of a folder of photos. For every PNG or
//! JPEG it measures four numbers (brightness, contrast, sharpness, noise),
//! compares them against fixed thresholds and prints advice in Portuguese and
//! English, plus a verdict on whether the image is in focus.
//!
//! # Pipeline
//!
//! ```text
//! scan      directory  →  sorted image paths   (extension filter)
//! decode    path       →  LumaGrid             (ImageBackend)
//! measure   LumaGrid   →  QualityMetrics       (metrics)
//! advise    metrics    →  Assessment           (advice + Thresholds)
//! report    Assessment →  stdout               (output)
//! ```
//!
//! Every step is a plain function over plain data. The only side effects are
//! reading files and writing the report, so the measuring and advising code is
//! tested on synthetic grids without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Luminance grids, decode backend, Laplacian and Gaussian filters |
//! | [`metrics`] | Brightness, contrast, sharpness and noise of a grid |
//! | [`advice`] | Threshold rules, bilingual advice texts, focus verdict |
//! | [`scan`] | Lists the image files of a directory |
//! | [`batch`] | Runs the per-image pipeline over a directory |
//! | [`output`] | Text and JSON report formatting |
//! | [`config`] | `image-advisor.toml` loading, merging and validation |
//!
//! # Design Decisions
//!
//! ## Fixed Thresholds
//!
//! The thresholds live in [`advice::Thresholds::STANDARD`] and are handed to
//! the advisor explicitly. They are not read from the config file: the advice
//! texts are written for these exact numbers.
//!
//! ## Sequential Processing
//!
//! Images are processed one at a time and each report is printed before the
//! next file is decoded. A batch that aborts on a corrupt file still leaves
//! the reports of the files before it on screen.

pub mod advice;
pub mod batch;
pub mod config;
pub mod imaging;
pub mod metrics;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
