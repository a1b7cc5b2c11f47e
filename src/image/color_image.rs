extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{DynamicImage,Rgb,Rgb32FImage};
use image_rs::imageops::{self,FilterType};
use na::DMatrix;

use crate::image::scaling::Resolution;
use crate::Float;

#[derive(Debug,Clone,PartialEq)]
pub struct ColorImage {
    pub buffer: Rgb32FImage
}

impl ColorImage {

    // 8 bit sources are scaled by 1/255.
    pub fn from_dynamic_image(image: &DynamicImage) -> ColorImage {
        ColorImage{ buffer: image.to_rgb32f() }
    }

    pub fn from_fn<F: Fn(usize,usize) -> [Float;3]>(width: usize, height: usize, pixel: F) -> ColorImage {
        let buffer = Rgb32FImage::from_fn(width as u32, height as u32, |x,y| {
            let [r,g,b] = pixel(y as usize, x as usize);
            Rgb([r as f32,g as f32,b as f32])
        });
        ColorImage{ buffer }
    }

    pub fn width(&self) -> usize {
        self.buffer.width() as usize
    }

    pub fn height(&self) -> usize {
        self.buffer.height() as usize
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.height(),self.width())
    }

    pub fn resize(&self, resolution: Resolution, filter: FilterType) -> ColorImage {
        if resolution == self.resolution() {
            return self.clone();
        }
        ColorImage{ buffer: imageops::resize(&self.buffer, resolution.width as u32, resolution.height as u32, filter) }
    }

    pub fn to_channel_first(&self) -> [DMatrix<Float>;3] {
        let (height, width) = (self.height(), self.width());
        let channel = |c: usize| DMatrix::<Float>::from_fn(height,width,|row,col| {
            self.buffer.get_pixel(col as u32, row as u32).0[c] as Float
        });
        [channel(0),channel(1),channel(2)]
    }
}
