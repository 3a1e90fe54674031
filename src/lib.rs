//! # Canny Edge Detection Library
//!
//! This crate extracts edge maps from raster images with a Canny-style
//! pipeline: Gaussian smoothing, full-overlap gradient convolution,
//! directional non-maximum suppression, double thresholding and hysteresis
//! linking. Per-pixel stages run in parallel with rayon; the hysteresis pass
//! is sequential and in place.
//!
//! ## Features
//!
//! - Sobel, Prewitt and Roberts operators through one kernel-pair contract
//! - Full convolution: the result grows by `kernel - 1` in each dimension
//! - 8-sector non-maximum suppression with a zeroed one-pixel border
//! - Double threshold relative to the thinned magnitude maximum
//! - Single raster-order hysteresis pass, or full flood-fill linking
//! - Edge overlay visualization
//! - Optional debug logging (enable with `logger` feature)
//! - Optional `serde` support for [`CannyConfig`]
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use image::open;
//! use canny_edge::{canny, visualize_edges, CannyConfig};
//!
//! let image = open("example.png").unwrap().to_luma8();
//! let config = CannyConfig::default();
//! let edges = canny(&image, &config).unwrap();
//!
//! // The edge map is larger than the input by the convolution growth.
//! assert_eq!(edges.width(), image.width() + 2);
//!
//! let result = visualize_edges(&image, &edges, config.strong);
//! result.save("edges_output.png").unwrap();
//! ```
//!
//! ## Running The Stages Yourself
//!
//! ```rust,no_run
//! use canny_edge::{
//!     double_threshold, hysteresis, non_maximum_suppression, EdgeLevels, GradientOperator,
//! };
//!
//! let image = image::open("example.png").unwrap().to_luma8();
//! let (magnitude, direction) = GradientOperator::Sobel.magnitude_and_direction(&image);
//! let thinned = non_maximum_suppression(&magnitude, &direction);
//! let levels = EdgeLevels::default();
//! let mut edges = double_threshold(&thinned, 0.05, 0.09, levels);
//! hysteresis(&mut edges, levels);
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! Enable debug logging to monitor the edge detection pipeline:
//!
//! ```toml
//! [dependencies]
//! canny-edge = { version = "0.1.0", features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! With the feature on, each stage emits messages such as
//! `DEBUG canny_edge::pipeline: thinned ok`.
//!
//! ## Known Limitation
//!
//! The default hysteresis is one raster-order pass over the grid it mutates.
//! Weak chains that must be reached against the scan direction only link at
//! the pixel touching their strong seed. Select
//! [`HysteresisMode::FloodFill`] for conventional connected linking.

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod convolution;
pub mod error;
pub mod gradient;
pub mod hysteresis;
pub mod intensity;
pub mod kernel;
pub mod nms;
pub mod pipeline;
pub mod smoothing;
pub mod threshold;
mod visualize;

use image::{ImageBuffer, Luma};

/// Single-channel float grid used for intensities, gradients and directions.
pub type FloatImage = ImageBuffer<Luma<f32>, Vec<f32>>;

pub use config::CannyConfig;
pub use convolution::{convolve_full, gradient_components, gradient_magnitude, Gradients};
pub use error::{Error, Result};
pub use gradient::{
    gradient_direction, prewitt_edges, roberts_edges, sobel_edges, GradientOperator,
};
pub use hysteresis::{hysteresis, hysteresis_flood_fill, link_edges, HysteresisMode};
pub use intensity::ToIntensity;
pub use kernel::{Kernel, KernelPair};
pub use nms::{non_maximum_suppression, Orientation};
pub use pipeline::{canny, canny_with_defaults, normalize_magnitude};
pub use smoothing::gaussian_smooth;
pub use threshold::{double_threshold, EdgeClass, EdgeLevels};
pub use visualize::visualize_edges;
