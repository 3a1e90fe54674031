//! Error types for canny-edge
//!
//! Only configuration validation and the pipeline entry points are fallible.
//! The individual stages work on grids whose shape the pipeline already
//! guarantees, so they return plain values.

use thiserror::Error;

/// Canny-edge error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Threshold ratio outside the open interval (0, 1)
    #[error("invalid {name} ratio: {value} (expected 0 < ratio < 1)")]
    InvalidRatio { name: &'static str, value: f32 },

    /// Low ratio larger than the high ratio
    #[error("low ratio {low} exceeds high ratio {high}")]
    InvertedRatios { low: f32, high: f32 },

    /// Weak/strong sentinels that collide with each other or with background
    #[error("invalid edge levels: weak {weak}, strong {strong}")]
    InvalidLevels { weak: u8, strong: u8 },

    /// Smoothing kernel size that is not odd
    #[error("invalid smoothing kernel size: {0} (expected an odd size)")]
    InvalidKernelSize(u32),

    /// Smoothing sigma that is not a positive finite number
    #[error("invalid smoothing sigma: {0}")]
    InvalidSigma(f32),

    /// Input image without pixels
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type alias for canny-edge operations
pub type Result<T> = std::result::Result<T, Error>;
