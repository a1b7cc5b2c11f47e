use std::path::{Path,PathBuf};

use crate::{MvsError,Result,ViewIndex};

// Image directories of a scene in order of preference.
pub const IMAGE_DIRECTORIES: [&str;2] = ["images_post","images"];
pub const CAM_DIRECTORY: &str = "cams";
pub const DEPTH_DIRECTORY: &str = "Depths_raw";

#[derive(Debug,Clone,PartialEq)]
pub struct ViewPaths {
    pub image_candidates: Vec<PathBuf>,
    pub cam: PathBuf,
    pub depth: PathBuf,
    pub mask: PathBuf
}

impl ViewPaths {
    pub fn new(datapath: &Path, scene: &str, view: ViewIndex) -> ViewPaths {
        let scene_root = datapath.join(scene);
        let depth_root = datapath.join(DEPTH_DIRECTORY).join(scene);

        ViewPaths {
            image_candidates: IMAGE_DIRECTORIES.iter().map(|dir| scene_root.join(dir).join(format!("{:0>8}.jpg", view))).collect(),
            cam: scene_root.join(CAM_DIRECTORY).join(format!("{:0>8}_cam.txt", view)),
            depth: depth_root.join(format!("depth_map_{:0>4}.pfm", view)),
            mask: depth_root.join(format!("depth_visual_{:0>4}.png", view))
        }
    }

    pub fn image(&self) -> Result<&Path> {
        self.image_candidates.iter()
            .find(|candidate| candidate.is_file())
            .map(|candidate| candidate.as_path())
            .ok_or_else(|| MvsError::MissingFile { candidates: self.image_candidates.clone() })
    }
}

pub fn pair_file(datapath: &Path, scene: &str) -> PathBuf {
    datapath.join(scene).join("pair.txt")
}
