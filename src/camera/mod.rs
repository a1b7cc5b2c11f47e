extern crate nalgebra as na;

use na::{Matrix3,Matrix4};
use crate::Float;

pub mod projection_matrix;

// `intrinsics` is already decimated to the resolution of the stored imagery and
// `depth_interval` carries the scene's interval scale.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct CameraParams {
    pub intrinsics: Matrix3<Float>,
    pub extrinsics: Matrix4<Float>,
    pub depth_min: Float,
    pub depth_interval: Float
}

impl CameraParams {
    pub fn get_fx(&self) -> Float {
        self.intrinsics[(0,0)]
    }

    pub fn get_fy(&self) -> Float {
        self.intrinsics[(1,1)]
    }

    pub fn get_cx(&self) -> Float {
        self.intrinsics[(0,2)]
    }

    pub fn get_cy(&self) -> Float {
        self.intrinsics[(1,2)]
    }
}
