extern crate nalgebra as na;

use na::Matrix3;
use mvs_loader::image::color_image::ColorImage;
use mvs_loader::image::scaling::{Resolution,ResolutionLock,bounded_resolution,scale_mvs_input};
use mvs_loader::{Float,MvsError};

fn intrinsics() -> Matrix3<Float> {
    Matrix3::<Float>::new(
        723.08, 0.0, 205.8,
        0.0, 720.8, 154.77,
        0.0, 0.0, 1.0)
}

fn gray_image(width: usize, height: usize) -> ColorImage {
    ColorImage::from_fn(width, height, |_,_| [0.5,0.5,0.5])
}

fn assert_rows_scaled(scaled: &Matrix3<Float>, original: &Matrix3<Float>, scale_w: Float, scale_h: Float) {
    for c in 0..3 {
        assert!((scaled[(0,c)] - original[(0,c)]*scale_w).abs() < 1e-3);
        assert!((scaled[(1,c)] - original[(1,c)]*scale_h).abs() < 1e-3);
        assert_eq!(scaled[(2,c)], original[(2,c)]);
    }
}

#[test]
fn oversized_square_image_is_fit_into_bound() {
    let image = gray_image(1000,1000);

    let (scaled, scaled_intrinsics) = scale_mvs_input(&image, &intrinsics(), 800, 800, 32).unwrap();

    assert!(scaled.height() <= 800 && scaled.width() <= 800);
    assert_eq!(scaled.height() % 32, 0);
    assert_eq!(scaled.width() % 32, 0);
    assert_eq!(scaled.resolution(), Resolution::new(800,800));
    assert_rows_scaled(&scaled_intrinsics, &intrinsics(), 0.8, 0.8);
}

#[test]
fn quantization_yields_per_axis_ratios() {
    let new_resolution = bounded_resolution(Resolution::new(600,1000), 512, 512, 32).unwrap();
    assert_eq!(new_resolution, Resolution::new(288,512));

    let (scaled, scaled_intrinsics) = scale_mvs_input(&gray_image(1000,600), &intrinsics(), 512, 512, 32).unwrap();
    assert_eq!(scaled.resolution(), new_resolution);
    assert_rows_scaled(&scaled_intrinsics, &intrinsics(), 512.0/1000.0, 288.0/600.0);
}

#[test]
fn small_image_is_only_quantized() {
    let new_resolution = bounded_resolution(Resolution::new(500,700), 800, 800, 32).unwrap();

    assert_eq!(new_resolution, Resolution::new(480,672));
}

#[test]
fn aligned_image_is_untouched() {
    let image = gray_image(160,128);

    let (scaled, scaled_intrinsics) = scale_mvs_input(&image, &intrinsics(), 800, 800, 32).unwrap();

    assert_eq!(scaled, image);
    assert_eq!(scaled_intrinsics, intrinsics());
}

#[test]
fn image_smaller_than_base_is_rejected() {
    let result = bounded_resolution(Resolution::new(20,600), 800, 800, 32);

    assert!(matches!(result, Err(MvsError::Config(_))));
}

#[test]
fn lock_resamples_later_views_onto_first() {
    let mut lock = ResolutionLock::unlocked();

    let (first, first_intrinsics) = lock.apply(gray_image(96,64), intrinsics());
    assert_eq!(lock.standard(), Some(Resolution::new(64,96)));
    assert_eq!(first.resolution(), Resolution::new(64,96));
    assert_eq!(first_intrinsics, intrinsics());

    let (second, second_intrinsics) = lock.apply(gray_image(64,32), intrinsics());
    assert_eq!(second.resolution(), Resolution::new(64,96));
    assert_rows_scaled(&second_intrinsics, &intrinsics(), 96.0/64.0, 64.0/32.0);
}

#[test]
fn preset_lock_applies_to_first_view() {
    let mut lock = ResolutionLock::locked_to(Resolution::new(32,64));

    let (image, _) = lock.apply(gray_image(128,64), intrinsics());

    assert_eq!(image.resolution(), Resolution::new(32,64));
    assert_eq!(lock.standard(), Some(Resolution::new(32,64)));
}
