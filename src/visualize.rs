//! Edge map overlay for visual inspection.

use image::{buffer::ConvertBuffer, GrayImage, Rgb, RgbImage};
use rayon::prelude::*;

/// Overlays an edge map on the image it was computed from.
///
/// The edge map is larger than the input by the convolution growth; it is
/// centred on the input so that each edge pixel lands on the source pixel
/// under the kernel anchor. Pixels equal to `strong` are drawn in red,
/// anything outside the input bounds is dropped.
///
/// # Examples
///
/// ```rust,no_run
/// use canny_edge::{canny_with_defaults, visualize_edges};
///
/// let image = image::open("input.png").unwrap().to_luma8();
/// let edges = canny_with_defaults(&image).unwrap();
/// visualize_edges(&image, &edges, 255).save("overlay.png").unwrap();
/// ```
pub fn visualize_edges(image: &GrayImage, edges: &GrayImage, strong: u8) -> RgbImage {
    let mut canvas: RgbImage = image.convert();
    let red = Rgb([255u8, 0, 0]);

    let offset_x = edges.width().saturating_sub(image.width()) / 2;
    let offset_y = edges.height().saturating_sub(image.height()) / 2;
    let edge_width = edges.width() as usize;
    let (canvas_width, canvas_height) = canvas.dimensions();

    // Filter in parallel, draw serially.
    let points: Vec<(u32, u32)> = edges
        .as_raw()
        .par_iter()
        .enumerate()
        .filter(|(_, value)| **value == strong)
        .filter_map(|(idx, _)| {
            let x = (idx % edge_width) as u32;
            let y = (idx / edge_width) as u32;
            let sx = x.checked_sub(offset_x)?;
            let sy = y.checked_sub(offset_y)?;
            (sx < canvas_width && sy < canvas_height).then_some((sx, sy))
        })
        .collect();

    for (sx, sy) in points {
        canvas.put_pixel(sx, sy, red);
    }

    canvas
}
