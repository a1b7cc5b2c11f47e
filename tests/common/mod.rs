#![allow(dead_code)]

extern crate image as image_rs;
extern crate nalgebra as na;

use std::fs;
use std::path::Path;
use image_rs::{GrayImage,Luma,Rgb,RgbImage};
use na::{DMatrix,Matrix3,Matrix4};

use mvs_loader::io::{cam_loader::cam_to_string,pfm_loader::write_pfm};
use mvs_loader::Float;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn intrinsics() -> Matrix3<Float> {
    Matrix3::<Float>::new(
        2892.33, 0.0, 823.205,
        0.0, 2883.18, 619.071,
        0.0, 0.0, 1.0)
}

pub fn extrinsics(view: usize) -> Matrix4<Float> {
    let t = view as Float;
    Matrix4::<Float>::new(
        0.970263, 0.00747983, 0.241939, -191.02 + t,
        -0.0147429, 0.999493, 0.0282234, 3.28832,
        -0.241605, -0.030951, 0.969881, 22.5401,
        0.0, 0.0, 0.0, 1.0)
}

pub fn write_pair_file(root: &Path, scene: &str, pairs: &[(usize,Vec<usize>)]) {
    let mut contents = format!("{}\n", pairs.len());
    for (reference, sources) in pairs {
        contents.push_str(&format!("{}\n{}", reference, sources.len()));
        for (rank, source) in sources.iter().enumerate() {
            contents.push_str(&format!(" {} {:.2}", source, 1000.0 - rank as f64));
        }
        contents.push('\n');
    }
    let scene_root = root.join(scene);
    fs::create_dir_all(&scene_root).unwrap();
    fs::write(scene_root.join("pair.txt"), contents).unwrap();
}

/// `depth_line` is written verbatim as line 11.
pub fn write_cam_with_depth_line(root: &Path, scene: &str, view: usize, depth_line: &str) {
    let contents = cam_to_string(&intrinsics(), &extrinsics(view), 0.0, 0.0);
    let mut lines = contents.lines().map(String::from).collect::<Vec<String>>();
    lines[11] = depth_line.to_string();
    let cam_root = root.join(scene).join("cams");
    fs::create_dir_all(&cam_root).unwrap();
    fs::write(cam_root.join(format!("{:0>8}_cam.txt", view)), lines.join("\n") + "\n").unwrap();
}

pub fn write_cam(root: &Path, scene: &str, view: usize) {
    write_cam_with_depth_line(root, scene, view, "425.0 2.5");
}

pub fn write_image(root: &Path, scene: &str, directory: &str, view: usize, width: u32, height: u32) {
    let image = RgbImage::from_fn(width, height, |x,y| Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y + view as u32) % 256) as u8]));
    let image_root = root.join(scene).join(directory);
    fs::create_dir_all(&image_root).unwrap();
    image.save(image_root.join(format!("{:0>8}.jpg", view))).unwrap();
}

pub fn write_depth_and_mask(root: &Path, scene: &str, view: usize, width: usize, height: usize) {
    let depth_root = root.join("Depths_raw").join(scene);
    fs::create_dir_all(&depth_root).unwrap();

    let depth = DMatrix::<Float>::from_fn(height, width, |r,c| 425.0 + (r + c) as Float);
    write_pfm(&depth_root.join(format!("depth_map_{:0>4}.pfm", view)), &depth).unwrap();

    let mask = GrayImage::from_fn(width as u32, height as u32, |x,_| Luma([if x % 2 == 0 {255} else {5}]));
    mask.save(depth_root.join(format!("depth_visual_{:0>4}.png", view))).unwrap();
}

/// Image, camera, depth and mask of one view.
pub fn write_view(root: &Path, scene: &str, view: usize, width: u32, height: u32) {
    write_image(root, scene, "images_post", view, width, height);
    write_cam(root, scene, view);
    write_depth_and_mask(root, scene, view, 64, 80);
}
