extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage,Pixel};
use image_rs::flat::NormalForm;
use na::DMatrix;

use crate::Float;
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod color_image;
pub mod image_stack;
pub mod scaling;

#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn from_matrix(matrix: DMatrix<Float>, original_encoding: ImageEncoding) -> Image {
        Image{ buffer: matrix, original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage) -> Image {
        Image{ buffer: Image::image8_to_matrix(image), original_encoding: ImageEncoding::U8}
    }

    pub fn crop_bottom(&self, rows: usize) -> Image {
        let kept_rows = self.height().saturating_sub(rows);
        Image{
            buffer: self.buffer.rows(0,kept_rows).into_owned(),
            original_encoding: self.original_encoding
        }
    }

    // Every value strictly greater than `threshold` becomes 1.0, everything else 0.0.
    pub fn threshold(&self, threshold: Float) -> Image {
        Image{
            buffer: self.buffer.map(|v| if v > threshold {1.0} else {0.0}),
            original_encoding: ImageEncoding::Mask
        }
    }

    // Nearest neighbour resampling to `(height/factor, width/factor)`.
    pub fn downsample_nearest(&self, factor: usize) -> Image {
        let new_height = self.height() / factor;
        let new_width = self.width() / factor;
        self.resize_nearest(new_height,new_width)
    }

    pub fn resize_nearest(&self, new_height: usize, new_width: usize) -> Image {
        let height = self.height();
        let width = self.width();

        let buffer = DMatrix::<Float>::from_fn(new_height,new_width,|r,c| {
            let source_r = ((r*height)/new_height).min(height-1);
            let source_c = ((c*width)/new_width).min(width-1);
            self.buffer[(source_r,source_c)]
        });

        Image{
            buffer,
            original_encoding: self.original_encoding
        }
    }

    fn image8_to_matrix(gray_image: &GrayImage) -> DMatrix<Float> {
        debug_assert!(gray_image.sample_layout().is_normal(NormalForm::RowMajorPacked));

        let (width, height) = gray_image.dimensions();
        DMatrix::<Float>::from_fn(height as usize, width as usize, |r,c| {
            gray_image.get_pixel(c as u32, r as u32).channels()[0] as Float
        })
    }
}
