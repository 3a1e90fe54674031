//! Grayscale reduction to a single-channel float intensity grid.
//!
//! Samples stay on the 0..=255 scale of 8-bit images. Colour inputs go through
//! the luminance conversion of the `image` crate; single-channel inputs pass
//! through unchanged.

use image::{buffer::ConvertBuffer, DynamicImage, GrayImage, ImageBuffer, RgbImage};

use crate::FloatImage;

/// Conversion of an image into a single-channel intensity grid.
pub trait ToIntensity {
    fn to_intensity(&self) -> FloatImage;
}

impl ToIntensity for FloatImage {
    fn to_intensity(&self) -> FloatImage {
        self.clone()
    }
}

impl ToIntensity for GrayImage {
    fn to_intensity(&self) -> FloatImage {
        let data: Vec<f32> = self.as_raw().iter().map(|p| *p as f32).collect();
        ImageBuffer::from_raw(self.width(), self.height(), data)
            .expect("one sample per pixel")
    }
}

impl ToIntensity for RgbImage {
    fn to_intensity(&self) -> FloatImage {
        let gray: GrayImage = self.convert();
        gray.to_intensity()
    }
}

impl ToIntensity for DynamicImage {
    fn to_intensity(&self) -> FloatImage {
        match self {
            DynamicImage::ImageLuma8(gray) => gray.to_intensity(),
            other => other.to_luma8().to_intensity(),
        }
    }
}
