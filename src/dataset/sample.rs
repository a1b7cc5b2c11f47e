use crate::camera::projection_matrix::ProjectionMatrix;
use crate::image::image_stack::ImageStack;
use crate::pyramid::{Staged,depth_pyramid::{DepthPyramid,MaskPyramid}};
use crate::{MvsError,Result,Float,ViewIndex};

#[derive(Debug,Clone)]
pub struct Sample {
    pub images: ImageStack,
    pub projection_matrices: Staged<Vec<ProjectionMatrix>>,
    pub depth_values: Vec<Float>,
    pub depth: DepthPyramid,
    pub mask: MaskPyramid,
    // `{scene}/{}/{reference:08}{}`, the placeholders being a result subdirectory and a file suffix.
    pub filename_template: String,
    pub view_ids: Vec<ViewIndex>
}

impl Sample {
    pub fn reference_view(&self) -> ViewIndex {
        self.view_ids[0]
    }

    pub fn filename(&self, subpath: &str, suffix: &str) -> String {
        self.filename_template.replacen("{}", subpath, 1).replacen("{}", suffix, 1)
    }
}

pub fn filename_template(scene: &str, reference_view: ViewIndex) -> String {
    format!("{}/{{}}/{:0>8}{{}}", scene, reference_view)
}

// depth_min + i*depth_interval, stopping before depth_min + depth_interval*(depth_count-0.5)
// a negative interval yields a descending sequence
pub fn depth_hypotheses(depth_min: Float, depth_interval: Float, depth_count: usize) -> Result<Vec<Float>> {
    if depth_interval == 0.0 || !depth_interval.is_finite() {
        return Err(MvsError::Config(format!("depth interval must be non-zero and finite, got {}", depth_interval)));
    }

    let start = depth_min as f64;
    let step = depth_interval as f64;
    let stop = step*(depth_count as f64 - 0.5) + start;
    let length = ((stop - start) / step).ceil().max(0.0) as usize;

    Ok((0..length).map(|i| (start + i as f64*step) as Float).collect::<Vec<Float>>())
}
