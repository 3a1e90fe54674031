//! Gradient operator families and per-pixel gradient direction.
//!
//! Every family supplies a `(horizontal, vertical)` kernel pair and goes
//! through the same full convolution. Only Sobel feeds the Canny pipeline by
//! default; Prewitt and Roberts are interchangeable through [`GradientOperator`].

use std::f32::consts::PI;

use image::ImageBuffer;
use rayon::prelude::*;

use crate::convolution::{gradient_components, gradient_magnitude, Gradients};
use crate::intensity::ToIntensity;
use crate::kernel::{
    KernelPair, PREWITT_HORIZONTAL_3X3, PREWITT_VERTICAL_3X3, ROBERTS_HORIZONTAL_2X2,
    ROBERTS_VERTICAL_2X2, SOBEL_HORIZONTAL_3X3, SOBEL_VERTICAL_3X3,
};
use crate::FloatImage;

/// Derivative operator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GradientOperator {
    /// 3x3 weighted central difference
    #[default]
    Sobel,
    /// 3x3 unweighted central difference
    Prewitt,
    /// 2x2 diagonal difference
    Roberts,
}

impl GradientOperator {
    pub const ALL: [GradientOperator; 3] = [
        GradientOperator::Sobel,
        GradientOperator::Prewitt,
        GradientOperator::Roberts,
    ];

    /// Kernel pair of this family.
    pub const fn kernels(self) -> KernelPair<'static> {
        match self {
            GradientOperator::Sobel => KernelPair {
                horizontal: SOBEL_HORIZONTAL_3X3,
                vertical: SOBEL_VERTICAL_3X3,
            },
            GradientOperator::Prewitt => KernelPair {
                horizontal: PREWITT_HORIZONTAL_3X3,
                vertical: PREWITT_VERTICAL_3X3,
            },
            GradientOperator::Roberts => KernelPair {
                horizontal: ROBERTS_HORIZONTAL_2X2,
                vertical: ROBERTS_VERTICAL_2X2,
            },
        }
    }

    /// Gradient magnitude only.
    pub fn magnitude<I: ToIntensity + ?Sized>(self, image: &I) -> FloatImage {
        gradient_magnitude(image, &self.kernels())
    }

    /// Magnitude plus both directional components.
    pub fn gradients<I: ToIntensity + ?Sized>(self, image: &I) -> Gradients {
        gradient_components(image, &self.kernels())
    }

    /// Magnitude plus per-pixel direction in radians.
    pub fn magnitude_and_direction<I: ToIntensity + ?Sized>(
        self,
        image: &I,
    ) -> (FloatImage, FloatImage) {
        let gradients = self.gradients(image);
        let direction = gradient_direction(&gradients.horizontal, &gradients.vertical);
        (gradients.magnitude, direction)
    }
}

/// `atan2(vertical, horizontal)` folded into (-π, π]; 0 where both are zero.
#[inline]
pub fn direction_of(horizontal: f32, vertical: f32) -> f32 {
    if horizontal == 0.0 && vertical == 0.0 {
        return 0.0;
    }
    let angle = vertical.atan2(horizontal);
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

/// Per-pixel gradient direction from the two directional components.
///
/// # Panics
///
/// If the two grids differ in size.
pub fn gradient_direction(horizontal: &FloatImage, vertical: &FloatImage) -> FloatImage {
    assert_eq!(
        horizontal.dimensions(),
        vertical.dimensions(),
        "gradient components must share dimensions"
    );
    let data: Vec<f32> = horizontal
        .as_raw()
        .par_iter()
        .zip(vertical.as_raw().par_iter())
        .map(|(h, v)| direction_of(*h, *v))
        .collect();
    ImageBuffer::from_raw(horizontal.width(), horizontal.height(), data)
        .expect("components share dimensions")
}

/// Sobel gradient magnitude.
pub fn sobel_edges<I: ToIntensity + ?Sized>(image: &I) -> FloatImage {
    GradientOperator::Sobel.magnitude(image)
}

/// Prewitt gradient magnitude.
pub fn prewitt_edges<I: ToIntensity + ?Sized>(image: &I) -> FloatImage {
    GradientOperator::Prewitt.magnitude(image)
}

/// Roberts cross gradient magnitude.
pub fn roberts_edges<I: ToIntensity + ?Sized>(image: &I) -> FloatImage {
    GradientOperator::Roberts.magnitude(image)
}
