//! Gaussian smoothing applied before gradient estimation.

use imageproc::filter::separable_filter_equal;

use crate::FloatImage;

/// Normalized 1D Gaussian weights of length `size`, centred on the middle tap.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let radius = (size / 2) as i32;
    let denom = 2.0 * sigma * sigma;
    let weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

/// Smooths `image` with a separable `size`-tap Gaussian of standard deviation `sigma`.
///
/// The output has the same shape as the input; borders replicate the edge
/// samples. A `size` of 0 or 1 returns the image unchanged.
pub fn gaussian_smooth(image: &FloatImage, size: u32, sigma: f32) -> FloatImage {
    if size <= 1 || image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    let kernel = gaussian_kernel(size, sigma);
    separable_filter_equal(image, kernel.as_slice())
}
