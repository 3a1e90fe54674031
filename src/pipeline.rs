//! Canny pipeline: smoothing, gradients, thinning, thresholds and linking.

use image::GrayImage;
use rayon::prelude::*;

use crate::config::CannyConfig;
use crate::error::{Error, Result};
use crate::hysteresis::link_edges;
use crate::intensity::ToIntensity;
use crate::nms::non_maximum_suppression;
use crate::smoothing::gaussian_smooth;
use crate::threshold::double_threshold;
use crate::FloatImage;

/// Runs Canny edge detection on `image`.
///
/// # Algorithm Pipeline
///
/// 1. Grayscale reduction
/// 2. Gaussian smoothing (`smoothing_kernel_size`, `smoothing_sigma`)
/// 3. Gradient magnitude and direction with the configured operator
/// 4. Magnitude rescale to [0, 255]
/// 5. Non-maximum suppression
/// 6. Double threshold (`low_ratio`, `high_ratio`)
/// 7. Hysteresis linking
///
/// The returned edge map has the grown shape of the full convolution,
/// `(width + kw - 1) x (height + kh - 1)`, with values 0 or `strong`.
///
/// # Errors
///
/// Invalid configuration, or an image without pixels.
///
/// # Examples
///
/// ```rust,no_run
/// use canny_edge::{canny, CannyConfig};
///
/// let image = image::open("input.png").unwrap();
/// let edges = canny(&image, &CannyConfig::default()).unwrap();
/// edges.save("edges.png").unwrap();
/// ```
pub fn canny<I>(image: &I, config: &CannyConfig) -> Result<GrayImage>
where
    I: ToIntensity + ?Sized,
{
    config.validate()?;
    let gray = image.to_intensity();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    debug!("start canny on {}x{}", width, height);

    let smoothed = gaussian_smooth(&gray, config.smoothing_kernel_size, config.smoothing_sigma);
    debug!("smoothed ok");

    let (magnitude, direction) = config.operator.magnitude_and_direction(&smoothed);
    let magnitude = normalize_magnitude(magnitude);
    debug!("gradients ok");

    let thinned = non_maximum_suppression(&magnitude, &direction);
    debug!("thinned ok");

    let levels = config.levels();
    let mut edges = double_threshold(&thinned, config.low_ratio, config.high_ratio, levels);
    debug!("thresholded ok");

    link_edges(&mut edges, levels, config.hysteresis);
    debug!("linked ok");

    Ok(edges)
}

/// [`canny`] with [`CannyConfig::default`].
pub fn canny_with_defaults<I>(image: &I) -> Result<GrayImage>
where
    I: ToIntensity + ?Sized,
{
    canny(image, &CannyConfig::default())
}

/// Rescales `magnitude` so its maximum becomes 255.
///
/// A grid whose maximum is not a positive finite number (a flat image) is
/// returned unchanged.
pub fn normalize_magnitude(mut magnitude: FloatImage) -> FloatImage {
    let max = magnitude
        .as_raw()
        .par_iter()
        .copied()
        .reduce(|| 0.0f32, f32::max);
    if !(max.is_finite() && max > 0.0) {
        debug!("flat gradient, skipping rescale");
        return magnitude;
    }
    let scale = 255.0 / max;
    let data: &mut [f32] = &mut magnitude;
    data.par_iter_mut().for_each(|m| *m *= scale);
    magnitude
}
