//! The luminance raster all quality metrics are computed on.

use image::DynamicImage;

/// A non-empty, row-major grid of 8-bit luminance values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl LumaGrid {
    /// Wrap raw row-major pixels.
    ///
    /// Returns `None` when either dimension is zero or the buffer length does
    /// not match `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Self {
        assert!(width > 0 && height > 0, "LumaGrid dimensions must be non-zero");
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A grid where every pixel has the same value.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::from_fn(width, height, |_, _| value)
    }

    /// Convert a decoded image to luminance.
    ///
    /// 8-bit grayscale is taken as-is (alpha dropped). Everything else is
    /// reduced to 8-bit RGB and weighted with the ITU-R 601-2 luma transform.
    /// Returns `None` for images without pixels.
    pub fn from_image(img: &DynamicImage) -> Option<Self> {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let pixels = match img {
            DynamicImage::ImageLuma8(gray) => gray.as_raw().clone(),
            DynamicImage::ImageLumaA8(_) => img.to_luma8().into_raw(),
            other => other.to_rgb8().pixels().map(|p| itu601_luma(p.0)).collect(),
        };
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (never zero).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    /// All pixels widened to `f64`, in row-major order.
    pub fn to_f64(&self) -> Vec<f64> {
        self.pixels.iter().map(|&v| f64::from(v)).collect()
    }
}

/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000` in 16.16 fixed point.
fn itu601_luma([r, g, b]: [u8; 3]) -> u8 {
    let weighted = 19595 * u32::from(r) + 38470 * u32::from(g) + 7471 * u32::from(b);
    ((weighted + 0x8000) >> 16) as u8
}
