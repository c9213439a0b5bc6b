//! Image decoding and pixel-level operations in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (PNG, JPEG) | `image::ImageReader` with content sniffing |
//! | **Luminance** | ITU-R 601-2 integer transform ([`LumaGrid::from_image`]) |
//! | **Laplacian** | 4-neighbour kernel, reflect-101 border |
//! | **Gaussian blur** | 5×5 binomial kernel, reflect-101 border |
//!
//! The module is split into:
//! - **Luma**: the [`LumaGrid`] raster every metric works on
//! - **Calculations**: pure statistics over `f64` samples (unit testable)
//! - **Filters**: convolution kernels over a [`LumaGrid`]
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
pub mod filters;
pub mod luma;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use luma::LumaGrid;
pub use rust_backend::RustBackend;
