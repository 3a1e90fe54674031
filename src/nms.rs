//! Non-maximum suppression along the quantized gradient direction.
//!
//! The direction in degrees is shifted by +180° onto [0°, 360°] and split into
//! eight 45° sectors centred on multiples of 45° (lower bound inclusive).
//! Opposite sectors fold onto the same [`Orientation`], which selects the two
//! neighbours compared against the centre pixel:
//!
//! ```text
//!   0°/180°  Horizontal    (r, c-1)   (r, c+1)
//!  45°/225°  Diagonal      (r+1, c-1) (r-1, c+1)
//!  90°/270°  Vertical      (r-1, c)   (r+1, c)
//! 135°/315°  AntiDiagonal  (r-1, c-1) (r+1, c+1)
//! ```
//!
//! The outermost row and column are never evaluated and stay 0.

use image::ImageBuffer;
use rayon::prelude::*;

use crate::FloatImage;

/// Quantized gradient orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Diagonal,
    Vertical,
    AntiDiagonal,
}

impl Orientation {
    /// Quantizes a direction in radians.
    pub fn from_radians(direction: f32) -> Self {
        let degrees = direction.to_degrees() + 180.0;
        let sector = ((degrees + 22.5) / 45.0).floor() as i32;
        match sector.rem_euclid(8) % 4 {
            0 => Orientation::Horizontal,
            1 => Orientation::Diagonal,
            2 => Orientation::Vertical,
            _ => Orientation::AntiDiagonal,
        }
    }

    /// `(row, column)` offsets of the two compared neighbours.
    pub const fn neighbours(self) -> [(isize, isize); 2] {
        match self {
            Orientation::Horizontal => [(0, -1), (0, 1)],
            Orientation::Diagonal => [(1, -1), (-1, 1)],
            Orientation::Vertical => [(-1, 0), (1, 0)],
            Orientation::AntiDiagonal => [(-1, -1), (1, 1)],
        }
    }
}

/// Thins `magnitude` to local maxima along `direction`.
///
/// A pixel keeps its value when it is greater than or equal to both
/// neighbours along its orientation, otherwise it becomes 0.
///
/// # Panics
///
/// If `magnitude` and `direction` differ in size.
pub fn non_maximum_suppression(magnitude: &FloatImage, direction: &FloatImage) -> FloatImage {
    assert_eq!(
        magnitude.dimensions(),
        direction.dimensions(),
        "magnitude and direction must share dimensions"
    );
    let (width, height) = magnitude.dimensions();
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0.0f32; w * h];

    if w >= 3 && h >= 3 {
        let mag = magnitude.as_raw();
        let dir = direction.as_raw();
        let at = |row: usize, col: usize, (dr, dc): (isize, isize)| {
            let r = (row as isize + dr) as usize;
            let c = (col as isize + dc) as usize;
            mag[r * w + c]
        };

        out.par_chunks_mut(w)
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(row, out_row)| {
                for col in 1..w - 1 {
                    let value = mag[row * w + col];
                    let [before, after] = Orientation::from_radians(dir[row * w + col]).neighbours();
                    if value >= at(row, col, before) && value >= at(row, col, after) {
                        out_row[col] = value;
                    }
                }
            });
    }

    debug!(
        "non-maximum suppression kept {} pixels",
        out.iter().filter(|v| **v > 0.0).count()
    );
    ImageBuffer::from_raw(width, height, out).expect("one sample per pixel")
}
