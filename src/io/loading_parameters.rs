extern crate serde_yaml;

use std::collections::HashMap;
use std::fs;
use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};

use crate::io::pair_loader::SourcePadding;
use crate::pyramid::pyramid_runtime_parameters::PyramidRuntimeParameters;
use crate::{MvsError,Result,SceneId,Float,DEFAULT_DEPTH_COUNT,DEFAULT_INTERVAL_SCALE,DEFAULT_RESOLUTION_BASE};

// Either one interval scale for every scene or an explicit entry per scene.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(untagged)]
pub enum IntervalScale {
    Uniform(Float),
    PerScene(HashMap<SceneId,Float>)
}

impl Default for IntervalScale {
    fn default() -> IntervalScale {
        IntervalScale::Uniform(DEFAULT_INTERVAL_SCALE)
    }
}

impl IntervalScale {
    pub fn for_scene(&self, scene: &str) -> Result<Float> {
        match self {
            IntervalScale::Uniform(scale) => Ok(*scale),
            IntervalScale::PerScene(scales) => scales.get(scene).copied()
                .ok_or_else(|| MvsError::Config(format!("no interval scale for scene {}", scene)))
        }
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct MvsLoadingParameters {
    pub datapath: PathBuf,
    pub scenes: Vec<SceneId>,
    pub target_view_count: usize,
    #[serde(default = "default_depth_count")]
    pub target_depth_count: usize,
    #[serde(default)]
    pub interval_scale: IntervalScale,
    pub max_h: usize,
    pub max_w: usize,
    // Lock every sample of a scene to the resolution of the first view loaded from it.
    #[serde(default)]
    pub fix_resolution_per_scene: bool,
    #[serde(default = "default_base")]
    pub base: usize,
    #[serde(default)]
    pub source_padding: SourcePadding,
    #[serde(default)]
    pub pyramid: PyramidRuntimeParameters
}

fn default_depth_count() -> usize {
    DEFAULT_DEPTH_COUNT
}

fn default_base() -> usize {
    DEFAULT_RESOLUTION_BASE
}

impl MvsLoadingParameters {
    pub fn new<P: Into<PathBuf>>(datapath: P, scenes: Vec<SceneId>, target_view_count: usize, max_h: usize, max_w: usize) -> MvsLoadingParameters {
        MvsLoadingParameters {
            datapath: datapath.into(),
            scenes,
            target_view_count,
            target_depth_count: DEFAULT_DEPTH_COUNT,
            interval_scale: IntervalScale::default(),
            max_h,
            max_w,
            fix_resolution_per_scene: false,
            base: DEFAULT_RESOLUTION_BASE,
            source_padding: SourcePadding::default(),
            pyramid: PyramidRuntimeParameters::default()
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<MvsLoadingParameters> {
        let parameters: MvsLoadingParameters = serde_yaml::from_str(contents).map_err(|e| MvsError::Config(e.to_string()))?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn from_yaml_file(file_path: &Path) -> Result<MvsLoadingParameters> {
        let contents = fs::read_to_string(file_path).map_err(|e| MvsError::io(file_path, e))?;
        MvsLoadingParameters::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_view_count < 2 {
            return Err(MvsError::Config(format!("target_view_count must be at least 2, got {}", self.target_view_count)));
        }
        if self.target_depth_count == 0 {
            return Err(MvsError::Config("target_depth_count must be positive".to_string()));
        }
        if self.base == 0 {
            return Err(MvsError::Config("base must be positive".to_string()));
        }
        if self.max_h < self.base || self.max_w < self.base {
            return Err(MvsError::Config(format!("max resolution ({},{}) is smaller than base {}", self.max_h, self.max_w, self.base)));
        }
        Ok(())
    }
}
