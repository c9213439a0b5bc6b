//! Convolution filters over a [`LumaGrid`].
//!
//! Both filters read outside the grid with reflect-101 borders
//! (`gfedcb|abcdefgh|gfedcba`): the edge pixel is the mirror axis and is not
//! repeated.

use super::luma::LumaGrid;

/// Binomial approximation of a Gaussian with σ = 1.1, in 1/16ths.
const GAUSSIAN_5: [u32; 5] = [1, 4, 6, 4, 1];

/// Map a possibly out-of-range index into `0..len` by reflect-101.
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let n = len as isize;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Discrete Laplacian with the 4-neighbour kernel
///
/// ```text
/// [ 0  1  0 ]
/// [ 1 -4  1 ]
/// [ 0  1  0 ]
/// ```
///
/// evaluated at every pixel, returned row-major.
pub fn laplacian(grid: &LumaGrid) -> Vec<f64> {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Vec::with_capacity(grid.pixel_count());
    for y in 0..h {
        let up = reflect_101(y as isize - 1, h);
        let down = reflect_101(y as isize + 1, h);
        for x in 0..w {
            let left = reflect_101(x as isize - 1, w);
            let right = reflect_101(x as isize + 1, w);
            let neighbours = i32::from(grid.get(x, up))
                + i32::from(grid.get(x, down))
                + i32::from(grid.get(left, y))
                + i32::from(grid.get(right, y));
            let value = neighbours - 4 * i32::from(grid.get(x, y));
            out.push(f64::from(value));
        }
    }
    out
}

/// 5×5 Gaussian blur, rounded back to 8 bits.
///
/// Separable: a horizontal pass keeps the exact integer sums, the vertical
/// pass divides by 256 with round-half-up, so a constant grid is returned
/// unchanged.
pub fn gaussian_blur_5x5(grid: &LumaGrid) -> LumaGrid {
    let (w, h) = (grid.width(), grid.height());

    let mut horizontal = vec![0u32; w * h];
    for y in 0..h {
        for x in 0..w {
            horizontal[y * w + x] = GAUSSIAN_5
                .iter()
                .enumerate()
                .map(|(k, &weight)| {
                    let sx = reflect_101(x as isize + k as isize - 2, w);
                    weight * u32::from(grid.get(sx, y))
                })
                .sum();
        }
    }

    LumaGrid::from_fn(w, h, |x, y| {
        let sum: u32 = GAUSSIAN_5
            .iter()
            .enumerate()
            .map(|(k, &weight)| {
                let sy = reflect_101(y as isize + k as isize - 2, h);
                weight * horizontal[sy * w + x]
            })
            .sum();
        ((sum + 128) >> 8) as u8
    })
}
