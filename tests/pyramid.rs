extern crate nalgebra as na;

use na::DMatrix;
use mvs_loader::image::{Image,image_encoding::ImageEncoding};
use mvs_loader::pyramid::{Stage,depth_pyramid::{build_depth_pyramid,build_mask_pyramid}};
use mvs_loader::pyramid::pyramid_runtime_parameters::PyramidRuntimeParameters;
use mvs_loader::Float;

fn depth_map(height: usize, width: usize) -> Image {
    Image::from_matrix(DMatrix::<Float>::from_fn(height, width, |r,c| (r*1000 + c) as Float), ImageEncoding::F32)
}

#[test]
fn stages_are_nearest_downsamples_of_cropped_map() {
    let pyramid = build_depth_pyramid(&depth_map(144,160), &PyramidRuntimeParameters::default());

    assert_eq!(pyramid.stage3.buffer.shape(), (128,160));
    assert_eq!(pyramid.stage2.buffer.shape(), (64,80));
    assert_eq!(pyramid.stage1.buffer.shape(), (32,40));

    assert_eq!(pyramid.stage3.buffer[(127,159)], 127159.0);
    assert_eq!(pyramid.stage2.buffer[(3,5)], 6010.0);
    assert_eq!(pyramid.stage1.buffer[(3,5)], 12020.0);
    assert_eq!(pyramid[Stage::Stage1], pyramid.stage1);
}

#[test]
fn odd_dimensions_are_floored() {
    let pyramid = build_depth_pyramid(&depth_map(146,150), &PyramidRuntimeParameters::default());

    assert_eq!(pyramid.stage3.buffer.shape(), (130,150));
    assert_eq!(pyramid.stage2.buffer.shape(), (65,75));
    assert_eq!(pyramid.stage1.buffer.shape(), (32,37));
}

#[test]
fn mask_is_thresholded_and_cropped() {
    let visual = Image::from_matrix(DMatrix::<Float>::from_fn(48, 32, |r,c| if (r + c) % 2 == 0 {11.0} else {10.0}), ImageEncoding::U8);

    let pyramid = build_mask_pyramid(&visual, &PyramidRuntimeParameters::default());

    assert_eq!(pyramid.stage3.buffer.shape(), (32,32));
    assert_eq!(pyramid.stage3.buffer[(0,0)], 1.0);
    assert_eq!(pyramid.stage3.buffer[(0,1)], 0.0);
    assert!(pyramid.stage1.buffer.iter().all(|&v| v == 1.0));
    assert!(pyramid.iter().all(|(_,stage)| stage.original_encoding.is_binary()));
}

#[test]
fn crop_rows_are_configurable() {
    let parameters = PyramidRuntimeParameters { crop_bottom_rows: 0, mask_threshold: 10.0 };

    let pyramid = build_depth_pyramid(&depth_map(64,64), &parameters);

    assert_eq!(pyramid.stage3.buffer.shape(), (64,64));
    assert_eq!(pyramid.stage1.buffer.shape(), (16,16));
}

#[test]
fn stage_names() {
    let pyramid = build_depth_pyramid(&depth_map(32,32), &PyramidRuntimeParameters::default());

    assert_eq!(pyramid.keys(), ["stage1","stage2","stage3"]);
    assert_eq!(pyramid.get_by_name("stage2"), Some(&pyramid.stage2));
    assert_eq!(pyramid.get_by_name("stage4"), None);
}
