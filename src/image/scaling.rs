extern crate image as image_rs;
extern crate nalgebra as na;

use std::fmt;
use image_rs::imageops::FilterType;
use na::Matrix3;

use crate::image::color_image::ColorImage;
use crate::{MvsError,Result,Float};

#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Resolution {
    pub height: usize,
    pub width: usize
}

impl Resolution {
    pub fn new(height: usize, width: usize) -> Resolution {
        Resolution{height,width}
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

// Target resolution of `scale_mvs_input`: uniformly shrunk into `max_h x max_w`, then floored to multiples of `base`.
pub fn bounded_resolution(resolution: Resolution, max_h: usize, max_w: usize, base: usize) -> Result<Resolution> {
    let h = resolution.height as f64;
    let w = resolution.width as f64;

    let scale = match resolution.height > max_h || resolution.width > max_w {
        true => (max_h as f64 / h).min(max_w as f64 / w),
        false => 1.0
    };

    let quantize = |v: f64| ((v / base as f64).floor() as usize) * base;
    let new_resolution = Resolution::new(quantize(scale*h), quantize(scale*w));

    if new_resolution.height == 0 || new_resolution.width == 0 {
        return Err(MvsError::Config(format!("image of {} collapses to {} with base {}", resolution, new_resolution, base)));
    }
    Ok(new_resolution)
}

pub fn scale_intrinsics(intrinsics: &Matrix3<Float>, from: Resolution, to: Resolution) -> Matrix3<Float> {
    let scale_w = to.width as Float / from.width as Float;
    let scale_h = to.height as Float / from.height as Float;

    let mut scaled = *intrinsics;
    let row_0 = scaled.row(0) * scale_w;
    let row_1 = scaled.row(1) * scale_h;
    scaled.set_row(0, &row_0);
    scaled.set_row(1, &row_1);
    scaled
}

// Quantization means the applied width and height ratios can differ slightly, so each
// intrinsic row is scaled by the ratio actually realised on its axis.
pub fn scale_mvs_input(image: &ColorImage, intrinsics: &Matrix3<Float>, max_h: usize, max_w: usize, base: usize) -> Result<(ColorImage,Matrix3<Float>)> {
    let resolution = image.resolution();
    let new_resolution = bounded_resolution(resolution, max_h, max_w, base)?;

    let scaled_intrinsics = scale_intrinsics(intrinsics, resolution, new_resolution);
    let scaled_image = image.resize(new_resolution, FilterType::Triangle);

    Ok((scaled_image,scaled_intrinsics))
}

// The first view passed through `apply` establishes the standard, later views are resampled onto it.
#[derive(Debug,Copy,Clone,PartialEq,Default)]
pub struct ResolutionLock {
    standard: Option<Resolution>
}

impl ResolutionLock {
    pub fn unlocked() -> ResolutionLock {
        ResolutionLock{standard: None}
    }

    pub fn locked_to(resolution: Resolution) -> ResolutionLock {
        ResolutionLock{standard: Some(resolution)}
    }

    pub fn standard(&self) -> Option<Resolution> {
        self.standard
    }

    pub fn apply(&mut self, image: ColorImage, intrinsics: Matrix3<Float>) -> (ColorImage,Matrix3<Float>) {
        let resolution = image.resolution();
        let standard = *self.standard.get_or_insert(resolution);

        match resolution == standard {
            true => (image,intrinsics),
            false => (image.resize(standard, FilterType::Nearest), scale_intrinsics(&intrinsics, resolution, standard))
        }
    }
}
