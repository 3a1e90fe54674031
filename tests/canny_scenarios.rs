use canny_edge::{
    canny, double_threshold, hysteresis, non_maximum_suppression, CannyConfig, EdgeLevels,
    GradientOperator, HysteresisMode,
};
use image::{GrayImage, Luma, RgbImage};

fn bright_square() -> GrayImage {
    GrayImage::from_fn(5, 5, |x, y| {
        Luma([if (1..4).contains(&x) && (1..4).contains(&y) { 255 } else { 0 }])
    })
}

#[test]
fn square_outline_is_a_thin_ring() {
    let (magnitude, direction) = GradientOperator::Sobel.magnitude_and_direction(&bright_square());
    let thinned = non_maximum_suppression(&magnitude, &direction);
    let levels = EdgeLevels::default();
    let mut edges = double_threshold(&thinned, 0.05, 0.09, levels);
    hysteresis(&mut edges, levels);

    const S: u8 = 255;
    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, S, 0, 0, 0,
        0, 0, S, S, S, 0, 0,
        0, S, S, 0, S, S, 0,
        0, 0, S, S, S, 0, 0,
        0, 0, 0, S, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0,
    ];
    assert_eq!(edges.dimensions(), (7, 7));
    assert_eq!(edges.as_raw(), &expected);
}

#[test]
fn all_zero_input_gives_background_for_every_operator() {
    let image = GrayImage::new(8, 6);
    for operator in GradientOperator::ALL {
        for mode in [HysteresisMode::SinglePass, HysteresisMode::FloodFill] {
            let config = CannyConfig::default().with_operator(operator).with_hysteresis(mode);
            let edges = canny(&image, &config).unwrap();
            assert!(edges.pixels().all(|p| p[0] == 0), "{operator:?} {mode:?}");
        }
    }
}

#[test]
fn colour_and_gray_inputs_agree() {
    let gray = GrayImage::from_fn(16, 12, |x, y| {
        Luma([if (x as i32 - 8).pow(2) + (y as i32 - 6).pow(2) < 16 { 255 } else { 0 }])
    });
    let rgb = RgbImage::from_fn(16, 12, |x, y| {
        let v = gray.get_pixel(x, y)[0];
        image::Rgb([v, v, v])
    });
    let config = CannyConfig::default();
    let from_gray = canny(&gray, &config).unwrap();
    let from_rgb = canny(&rgb, &config).unwrap();
    assert_eq!(from_gray, from_rgb);
}

#[test]
fn flood_fill_links_at_least_what_the_single_pass_links() {
    let image = GrayImage::from_fn(24, 24, |x, y| {
        let d = ((x as f32 - 11.5).powi(2) + (y as f32 - 11.5).powi(2)).sqrt();
        Luma([(d * 9.0).min(255.0) as u8])
    });
    let single = canny(&image, &CannyConfig::default()).unwrap();
    let flooded = canny(
        &image,
        &CannyConfig::default().with_hysteresis(HysteresisMode::FloodFill),
    )
    .unwrap();
    for (a, b) in single.pixels().zip(flooded.pixels()) {
        if a[0] == 255 {
            assert_eq!(b[0], 255);
        }
    }
}
