extern crate nalgebra as na;

use na::{Matrix3,Matrix4};

use crate::pyramid::Staged;
use crate::Float;

// Slot 0 holds the extrinsics, slot 1 the intrinsics in its top left `3x3` block with zeros elsewhere.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ProjectionMatrix {
    pub extrinsics: Matrix4<Float>,
    pub intrinsics: Matrix4<Float>
}

impl ProjectionMatrix {
    pub fn new(extrinsics: &Matrix4<Float>, intrinsics: &Matrix3<Float>) -> ProjectionMatrix {
        let mut embedded = Matrix4::<Float>::zeros();
        embedded.fixed_view_mut::<3,3>(0,0).copy_from(intrinsics);
        ProjectionMatrix{extrinsics: *extrinsics, intrinsics: embedded}
    }

    pub fn get_intrinsics(&self) -> Matrix3<Float> {
        self.intrinsics.fixed_view::<3,3>(0,0).into_owned()
    }

    pub fn scale_intrinsics(&self, factor: Float) -> ProjectionMatrix {
        let mut scaled = *self;
        for r in 0..2 {
            let row = scaled.intrinsics.row(r) * factor;
            scaled.intrinsics.set_row(r, &row);
        }
        scaled
    }
}

// stage1 keeps the matrices, stage2 and stage3 scale the intrinsics by 2 and 4 respectively.
pub fn stage_projection_matrices(projection_matrices: &[ProjectionMatrix]) -> Staged<Vec<ProjectionMatrix>> {
    Staged::from_fn(|stage| {
        let factor = stage.intrinsic_scale();
        projection_matrices.iter().map(|m| m.scale_intrinsics(factor)).collect::<Vec<ProjectionMatrix>>()
    })
}
