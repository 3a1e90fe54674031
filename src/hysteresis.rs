//! Hysteresis linking of weak edge pixels.
//!
//! [`hysteresis`] is a single raster-order pass that reads and writes the same
//! grid: a weak pixel promoted earlier in the pass counts as strong for every
//! later neighbour check. Propagation therefore only follows the scan
//! direction. A weak chain that has to be reached against raster order (seed
//! below/right of the chain) links only at the pixel touching the seed; the
//! rest of the chain is dropped.
//!
//! [`hysteresis_flood_fill`] links every weak pixel 8-connected to a strong
//! one, regardless of scan order.
//!
//! Both leave the outermost row and column untouched.

use image::GrayImage;

use crate::threshold::EdgeLevels;

/// 8-neighbourhood as `(dx, dy)`.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Weak pixel resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HysteresisMode {
    /// One in-place raster-order pass
    #[default]
    SinglePass,
    /// Full propagation from every strong pixel
    FloodFill,
}

/// Resolves weak pixels of `edges` with the given `mode`.
pub fn link_edges(edges: &mut GrayImage, levels: EdgeLevels, mode: HysteresisMode) {
    match mode {
        HysteresisMode::SinglePass => hysteresis(edges, levels),
        HysteresisMode::FloodFill => hysteresis_flood_fill(edges, levels),
    }
}

/// Single raster-order hysteresis pass, in place.
///
/// Each interior weak pixel becomes strong if any of its 8 neighbours is
/// strong at the time it is visited, background otherwise. Non-weak pixels
/// keep their value. Levels that are not distinct from each other and from
/// background leave the grid unchanged.
pub fn hysteresis(edges: &mut GrayImage, levels: EdgeLevels) {
    let (width, height) = edges.dimensions();
    if width < 3 || height < 3 || !levels.is_distinct() {
        return;
    }
    let w = width as usize;
    let buf: &mut [u8] = edges;

    for y in 1..height as usize - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            if buf[idx] != levels.weak {
                continue;
            }
            let linked = NEIGHBOURS.iter().any(|&(dx, dy)| {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                buf[ny * w + nx] == levels.strong
            });
            buf[idx] = if linked { levels.strong } else { 0 };
        }
    }
    debug!("hysteresis pass over {}x{} done", width, height);
}

/// Flood-fill hysteresis: every interior weak pixel 8-connected to a strong
/// pixel through other weak pixels becomes strong, the remaining interior weak
/// pixels become background.
pub fn hysteresis_flood_fill(edges: &mut GrayImage, levels: EdgeLevels) {
    let (width, height) = edges.dimensions();
    if width < 3 || height < 3 || !levels.is_distinct() {
        return;
    }
    let interior = |x: i64, y: i64| x >= 1 && y >= 1 && x < width as i64 - 1 && y < height as i64 - 1;

    // Stack for depth-first propagation, seeded with every strong pixel.
    let mut stack: Vec<(u32, u32)> = edges
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] == levels.strong)
        .map(|(x, y, _)| (x, y))
        .collect();

    while let Some((x, y)) = stack.pop() {
        for &(dx, dy) in &NEIGHBOURS {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if !interior(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let pixel = edges.get_pixel_mut(nx, ny);
            if pixel[0] == levels.weak {
                pixel[0] = levels.strong;
                stack.push((nx, ny));
            }
        }
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let pixel = edges.get_pixel_mut(x, y);
            if pixel[0] == levels.weak {
                pixel[0] = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    const W: u8 = 70;
    const S: u8 = 255;

    fn grid(rows: &[&[u8]]) -> GrayImage {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        GrayImage::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn chain_along_raster_order_links_fully() {
        let mut edges = grid(&[
            &[S, 0, 0, 0, 0],
            &[0, W, 0, 0, 0],
            &[0, 0, W, 0, 0],
            &[0, 0, 0, W, 0],
            &[0, 0, 0, 0, 0],
        ]);
        hysteresis(&mut edges, EdgeLevels::default());
        assert_eq!(edges.get_pixel(1, 1)[0], S);
        assert_eq!(edges.get_pixel(2, 2)[0], S);
        assert_eq!(edges.get_pixel(3, 3)[0], S);
    }

    #[test]
    fn chain_against_raster_order_links_only_next_to_seed() {
        let original = grid(&[
            &[0, 0, 0, 0, 0],
            &[0, W, 0, 0, 0],
            &[0, 0, W, 0, 0],
            &[0, 0, 0, W, 0],
            &[0, 0, 0, 0, S],
        ]);

        let mut single = original.clone();
        hysteresis(&mut single, EdgeLevels::default());
        assert_eq!(single.get_pixel(1, 1)[0], 0);
        assert_eq!(single.get_pixel(2, 2)[0], 0);
        assert_eq!(single.get_pixel(3, 3)[0], S);

        let mut flooded = original;
        hysteresis_flood_fill(&mut flooded, EdgeLevels::default());
        assert_eq!(flooded.get_pixel(1, 1)[0], S);
        assert_eq!(flooded.get_pixel(2, 2)[0], S);
        assert_eq!(flooded.get_pixel(3, 3)[0], S);
    }

    #[test]
    fn isolated_weak_pixels_become_background() {
        let mut edges = grid(&[
            &[0, 0, 0, 0],
            &[0, W, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        hysteresis(&mut edges, EdgeLevels::default());
        assert!(edges.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn border_pixels_are_never_evaluated() {
        let original = grid(&[
            &[W, 0, 0, W],
            &[0, S, 0, 0],
            &[0, 0, 0, 0],
            &[W, 0, 0, 0],
        ]);
        for mode in [HysteresisMode::SinglePass, HysteresisMode::FloodFill] {
            let mut edges = original.clone();
            link_edges(&mut edges, EdgeLevels::default(), mode);
            assert_eq!(edges, original);
        }
    }

    #[test]
    fn idempotent_without_weak_pixels() {
        let original = GrayImage::from_fn(6, 5, |x, y| Luma([if (x + y) % 3 == 0 { S } else { 0 }]));
        let mut edges = original.clone();
        hysteresis(&mut edges, EdgeLevels::default());
        assert_eq!(edges, original);
        hysteresis_flood_fill(&mut edges, EdgeLevels::default());
        assert_eq!(edges, original);
    }

    #[test]
    fn custom_levels_are_respected() {
        let levels = EdgeLevels::new(9, 200);
        let mut edges = grid(&[
            &[0, 0, 0, 0],
            &[0, 200, 9, 0],
            &[0, 0, 0, 9],
            &[0, 0, 0, 0],
        ]);
        hysteresis(&mut edges, levels);
        assert_eq!(edges.get_pixel(2, 1)[0], 200);
        // (3, 2) is on the border and stays weak.
        assert_eq!(edges.get_pixel(3, 2)[0], 9);
    }

    #[test]
    fn colliding_levels_leave_grid_unchanged() {
        let original = grid(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, S, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        for levels in [EdgeLevels::new(0, S), EdgeLevels::new(W, 0), EdgeLevels::new(W, W)] {
            for mode in [HysteresisMode::SinglePass, HysteresisMode::FloodFill] {
                let mut edges = original.clone();
                link_edges(&mut edges, levels, mode);
                assert_eq!(edges, original, "{levels:?} {mode:?}");
            }
        }
    }
}
