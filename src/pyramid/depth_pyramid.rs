use std::path::Path;
use log::debug;

use crate::image::{Image,image_encoding::ImageEncoding};
use crate::io::{load_image_as_gray,pfm_loader::load_pfm};
use crate::pyramid::{Staged,pyramid_runtime_parameters::PyramidRuntimeParameters};
use crate::Result;

pub type DepthPyramid = Staged<Image>;
pub type MaskPyramid = Staged<Image>;

pub fn build_pyramid(cropped: Image) -> Staged<Image> {
    Staged::from_fn(|stage| match stage.downsample_factor() {
        1 => cropped.clone(),
        factor => cropped.downsample_nearest(factor)
    })
}

pub fn build_depth_pyramid(depth_map: &Image, runtime_parameters: &PyramidRuntimeParameters) -> DepthPyramid {
    build_pyramid(depth_map.crop_bottom(runtime_parameters.crop_bottom_rows))
}

// Visibility values above the threshold become 1.0, the rest 0.0.
pub fn build_mask_pyramid(visual: &Image, runtime_parameters: &PyramidRuntimeParameters) -> MaskPyramid {
    build_pyramid(visual.threshold(runtime_parameters.mask_threshold).crop_bottom(runtime_parameters.crop_bottom_rows))
}

pub fn load_depth_pyramid(file_path: &Path, runtime_parameters: &PyramidRuntimeParameters) -> Result<DepthPyramid> {
    let depth_map = Image::from_matrix(load_pfm(file_path)?, ImageEncoding::F32);
    debug!("depth map {} is {}x{}", file_path.display(), depth_map.height(), depth_map.width());
    Ok(build_depth_pyramid(&depth_map, runtime_parameters))
}

pub fn load_mask_pyramid(file_path: &Path, runtime_parameters: &PyramidRuntimeParameters) -> Result<MaskPyramid> {
    let visual = load_image_as_gray(file_path)?;
    Ok(build_mask_pyramid(&visual, runtime_parameters))
}
