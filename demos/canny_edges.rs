use std::time::Instant;

use canny_edge::{canny, visualize_edges, CannyConfig};
use env_logger::Builder;
use image::open;
use log::info;

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test_image/edge.png".to_string());
    let img = open(&path).unwrap();
    info!("Loaded {}: {}x{}", path, img.width(), img.height());

    let config = CannyConfig::default();
    let instance = Instant::now();
    let edges = canny(&img, &config).unwrap();
    let elapsed = instance.elapsed();
    info!("Detection took {elapsed:?}");

    let edge_count = edges.pixels().filter(|p| p[0] == config.strong).count();
    info!(
        "Edge map {}x{} with {} edge pixels",
        edges.width(),
        edges.height(),
        edge_count
    );

    edges.save("test_image/canny_edges.png").unwrap();
    let overlay = visualize_edges(&img.to_luma8(), &edges, config.strong);
    overlay.save("test_image/canny_overlay.png").unwrap();
}
