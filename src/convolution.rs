//! Full-overlap convolution of an intensity grid with a derivative kernel pair.
//!
//! "Full" mode lets the kernel overhang every border with zero fill, so the
//! result grows by `kernel - 1` in each dimension:
//!
//! ```text
//! out(M + Kh - 1, N + Kw - 1)[r][c] = sum over (a, b) of in[r - a][c - b] * k[a][b]
//! ```
//!
//! The kernel is flipped (true convolution, not correlation). Both directional
//! components and the magnitude share the grown shape so they stay aligned.

use image::ImageBuffer;
use rayon::prelude::*;

use crate::intensity::ToIntensity;
use crate::kernel::{Kernel, KernelPair};
use crate::FloatImage;

/// Gradient components and their Euclidean magnitude, all on the grown grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    /// Response to the horizontal kernel
    pub horizontal: FloatImage,
    /// Response to the vertical kernel
    pub vertical: FloatImage,
    /// `sqrt(horizontal^2 + vertical^2)` per pixel
    pub magnitude: FloatImage,
}

/// Convolves `image` with `kernel` in full mode.
///
/// Rows of the output are computed in parallel; every output sample is owned
/// by exactly one task, so the result does not depend on scheduling.
pub fn convolve_full(image: &FloatImage, kernel: &Kernel) -> FloatImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return FloatImage::new(0, 0);
    }

    let (kernel_width, kernel_height) = (kernel.width(), kernel.height());
    let out_width = (width + kernel_width - 1) as usize;
    let out_height = (height + kernel_height - 1) as usize;
    let pixels = image.as_raw();
    let (width, height) = (width as usize, height as usize);

    let mut out = vec![0.0f32; out_width * out_height];
    out.par_chunks_mut(out_width)
        .enumerate()
        .for_each(|(row, out_row)| {
            for (col, value) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for ky in 0..kernel_height {
                    // Source row under this kernel row; skip the zero fill.
                    let Some(src_row) = row.checked_sub(ky as usize) else {
                        break;
                    };
                    if src_row >= height {
                        continue;
                    }
                    let src = &pixels[src_row * width..(src_row + 1) * width];
                    for kx in 0..kernel_width {
                        let Some(src_col) = col.checked_sub(kx as usize) else {
                            break;
                        };
                        if src_col >= width {
                            continue;
                        }
                        acc += src[src_col] * kernel.at(kx, ky) as f32;
                    }
                }
                *value = acc;
            }
        });

    ImageBuffer::from_raw(out_width as u32, out_height as u32, out)
        .expect("one sample per output pixel")
}

/// Gradient magnitude of `image` under `kernels`.
pub fn gradient_magnitude<I>(image: &I, kernels: &KernelPair) -> FloatImage
where
    I: ToIntensity + ?Sized,
{
    gradient_components(image, kernels).magnitude
}

/// Gradient magnitude together with both directional components.
pub fn gradient_components<I>(image: &I, kernels: &KernelPair) -> Gradients
where
    I: ToIntensity + ?Sized,
{
    let gray = image.to_intensity();
    let horizontal = convolve_full(&gray, &kernels.horizontal);
    let vertical = convolve_full(&gray, &kernels.vertical);
    debug!(
        "convolved {}x{} -> {}x{}",
        gray.width(),
        gray.height(),
        horizontal.width(),
        horizontal.height()
    );

    let magnitude_data: Vec<f32> = horizontal
        .as_raw()
        .par_iter()
        .zip(vertical.as_raw().par_iter())
        .map(|(h, v)| (h.powi(2) + v.powi(2)).sqrt())
        .collect();
    let magnitude = ImageBuffer::from_raw(horizontal.width(), horizontal.height(), magnitude_data)
        .expect("components share dimensions");

    Gradients {
        horizontal,
        vertical,
        magnitude,
    }
}
