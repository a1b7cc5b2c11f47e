extern crate nalgebra as na;

use na::DMatrix;

use crate::image::{color_image::ColorImage,scaling::Resolution};
use crate::{MvsError,Result,Float};

// Views x channels x height x width, every view sharing one resolution.
#[derive(Debug,Clone,PartialEq)]
pub struct ImageStack {
    pub views: Vec<[DMatrix<Float>;3]>,
    pub resolution: Resolution
}

impl ImageStack {

    pub fn from_color_images(images: &[ColorImage]) -> Result<ImageStack> {
        let resolution = images.first()
            .map(|image| image.resolution())
            .ok_or_else(|| MvsError::Config("cannot stack zero views".to_string()))?;

        if let Some(mismatch) = images.iter().find(|image| image.resolution() != resolution) {
            return Err(MvsError::Config(format!("view resolution {} differs from {}", mismatch.resolution(), resolution)));
        }

        Ok(ImageStack {
            views: images.iter().map(|image| image.to_channel_first()).collect(),
            resolution
        })
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn shape(&self) -> (usize,usize,usize,usize) {
        (self.views.len(), 3, self.resolution.height, self.resolution.width)
    }

    pub fn get(&self, view: usize, channel: usize, row: usize, col: usize) -> Float {
        self.views[view][channel][(row,col)]
    }
}
