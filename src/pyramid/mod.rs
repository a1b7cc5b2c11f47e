use std::fmt;
use std::ops::Index;

use crate::Float;

pub mod pyramid_runtime_parameters;
pub mod depth_pyramid;

// Resolution levels of the depth network. stage1 is spatially the smallest.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub enum Stage {
    Stage1,
    Stage2,
    Stage3
}

impl Stage {
    pub const ALL: [Stage;3] = [Stage::Stage1,Stage::Stage2,Stage::Stage3];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Stage1 => "stage1",
            Stage::Stage2 => "stage2",
            Stage::Stage3 => "stage3"
        }
    }

    pub fn from_name(name: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|stage| stage.name() == name)
    }

    // Spatial downsampling of depth and mask maps relative to the cropped native map.
    pub fn downsample_factor(&self) -> usize {
        match self {
            Stage::Stage1 => 4,
            Stage::Stage2 => 2,
            Stage::Stage3 => 1
        }
    }

    // Factor applied to the first two intrinsic rows.
    pub fn intrinsic_scale(&self) -> Float {
        match self {
            Stage::Stage1 => 1.0,
            Stage::Stage2 => 2.0,
            Stage::Stage3 => 4.0
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct Staged<T> {
    pub stage1: T,
    pub stage2: T,
    pub stage3: T
}

impl<T> Staged<T> {
    pub fn from_fn<F: FnMut(Stage) -> T>(mut f: F) -> Staged<T> {
        Staged {
            stage1: f(Stage::Stage1),
            stage2: f(Stage::Stage2),
            stage3: f(Stage::Stage3)
        }
    }

    pub fn get(&self, stage: Stage) -> &T {
        match stage {
            Stage::Stage1 => &self.stage1,
            Stage::Stage2 => &self.stage2,
            Stage::Stage3 => &self.stage3
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        Stage::from_name(name).map(|stage| self.get(stage))
    }

    pub fn keys(&self) -> [&'static str;3] {
        [Stage::Stage1.name(),Stage::Stage2.name(),Stage::Stage3.name()]
    }

    pub fn iter(&self) -> impl Iterator<Item=(Stage,&T)> {
        (0..Stage::ALL.len()).map(move |i| (Stage::ALL[i],self.get(Stage::ALL[i])))
    }
}

impl<T> Index<Stage> for Staged<T> {
    type Output = T;

    fn index(&self, stage: Stage) -> &T {
        self.get(stage)
    }
}
