//! Double-threshold classification of a thinned magnitude grid.
//!
//! Thresholds are ratios of the grid's own maximum. The weak band is the
//! closed interval `[low, high]`; at exactly `high` the strong class wins.

use image::{GrayImage, ImageBuffer, Luma};
use imageproc::definitions::{HasBlack, HasWhite};
use rayon::prelude::*;

use crate::FloatImage;

/// Pixel values of the weak and strong classes in a classification grid.
/// Background is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeLevels {
    pub weak: u8,
    pub strong: u8,
}

impl Default for EdgeLevels {
    fn default() -> Self {
        Self {
            weak: 70,
            strong: Luma::<u8>::white()[0],
        }
    }
}

impl EdgeLevels {
    pub const fn new(weak: u8, strong: u8) -> Self {
        Self { weak, strong }
    }

    /// Whether background, weak and strong are three different values.
    pub const fn is_distinct(self) -> bool {
        self.weak != 0 && self.strong != 0 && self.weak != self.strong
    }

    /// Decodes a grid value; `None` for values outside the three classes.
    pub fn classify(self, value: u8) -> Option<EdgeClass> {
        if value == self.strong {
            Some(EdgeClass::Strong)
        } else if value == self.weak {
            Some(EdgeClass::Weak)
        } else if value == 0 {
            Some(EdgeClass::Background)
        } else {
            None
        }
    }

    /// Grid value of `class`.
    pub const fn value(self, class: EdgeClass) -> u8 {
        match class {
            EdgeClass::Background => 0,
            EdgeClass::Weak => self.weak,
            EdgeClass::Strong => self.strong,
        }
    }
}

/// Three-level edge classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    Background,
    Weak,
    Strong,
}

/// Classifies `magnitude` into background, weak and strong pixels.
///
/// `high = max * high_ratio`, `low = max * low_ratio`. Pixels `>= high` are
/// strong, pixels in `[low, high]` that are not strong are weak, everything
/// else (including NaN) is background. A grid whose maximum is not a
/// positive finite number is all background.
pub fn double_threshold(
    magnitude: &FloatImage,
    low_ratio: f32,
    high_ratio: f32,
    levels: EdgeLevels,
) -> GrayImage {
    let (width, height) = magnitude.dimensions();
    let max = magnitude
        .as_raw()
        .par_iter()
        .copied()
        .reduce(|| 0.0f32, f32::max);

    if !(max.is_finite() && max > 0.0) {
        debug!("double threshold: degenerate maximum {}", max);
        return ImageBuffer::from_pixel(width, height, Luma::<u8>::black());
    }

    let high = max * high_ratio;
    let low = max * low_ratio;
    debug!("double threshold: low {} high {}", low, high);

    let data: Vec<u8> = magnitude
        .as_raw()
        .par_iter()
        .map(|&m| {
            let class = if m >= high {
                EdgeClass::Strong
            } else if m >= low && m <= high {
                EdgeClass::Weak
            } else {
                EdgeClass::Background
            };
            levels.value(class)
        })
        .collect();

    ImageBuffer::from_raw(width, height, data).expect("one sample per pixel")
}
