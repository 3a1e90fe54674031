use std::time::{Duration, Instant};

use canny_edge::{canny, CannyConfig, HysteresisMode};
use env_logger::Builder;
use image::{GrayImage, Luma};
use log::info;

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    // Synthetic scene: two rings and a diagonal bar on a soft ramp.
    let (width, height) = (640u32, 480u32);
    let image = GrayImage::from_fn(width, height, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        let mut value = (fx / width as f32) * 60.0;

        let d1 = ((fx - 200.0).powi(2) + (fy - 240.0).powi(2)).sqrt();
        if (80.0..110.0).contains(&d1) {
            value += 150.0;
        }
        let d2 = ((fx - 470.0).powi(2) + (fy - 200.0).powi(2)).sqrt();
        if d2 < 60.0 {
            value += 90.0;
        }
        if ((x as i32 - y as i32) - 100).abs() < 6 {
            value += 40.0;
        }
        Luma([value.min(255.0) as u8])
    });

    let runs = 5;
    for mode in [HysteresisMode::SinglePass, HysteresisMode::FloodFill] {
        let config = CannyConfig::default().with_hysteresis(mode);
        let mut times = Vec::with_capacity(runs);
        let mut edge_count = 0;
        for i in 0..runs {
            let start = Instant::now();
            let edges = canny(&image, &config).unwrap();
            times.push(start.elapsed());
            edge_count = edges.pixels().filter(|p| p[0] == config.strong).count();
            info!("{mode:?} run {}/{}: {:?}", i + 1, runs, times[i]);
        }
        let average = times.iter().sum::<Duration>() / runs as u32;
        info!("{mode:?}: average {average:?}, {edge_count} edge pixels");
    }
}
