use serde::{Serialize,Deserialize};
use crate::Float;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PyramidRuntimeParameters {
    // Rows removed from the bottom of depth and mask maps.
    pub crop_bottom_rows: usize,
    pub mask_threshold: Float
}

impl Default for PyramidRuntimeParameters {
    fn default() -> PyramidRuntimeParameters {
        PyramidRuntimeParameters {
            crop_bottom_rows: 16,
            mask_threshold: 10.0
        }
    }
}
