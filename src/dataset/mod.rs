use std::collections::HashMap;
use log::{info,debug};

use crate::camera::{CameraParams,projection_matrix::{ProjectionMatrix,stage_projection_matrices}};
use crate::image::{color_image::ColorImage,image_stack::ImageStack,scaling::{Resolution,ResolutionLock,scale_mvs_input}};
use crate::io::{load_image_as_rgb,cam_loader::load_cam,loading_parameters::MvsLoadingParameters,pair_loader::{PairEntry,load_scene_entries}};
use crate::pyramid::depth_pyramid::{load_depth_pyramid,load_mask_pyramid};
use crate::{MvsError,Result,SceneId,Float};
use self::sample::{Sample,depth_hypotheses,filename_template};
use self::view_paths::{ViewPaths,pair_file};

pub mod sample;
pub mod view_paths;

#[derive(Debug,Clone)]
pub struct MvsDataset {
    parameters: MvsLoadingParameters,
    entries: Vec<PairEntry>,
    interval_scales: HashMap<SceneId,Float>,
    scene_resolutions: HashMap<SceneId,Resolution>
}

impl MvsDataset {

    pub fn new(parameters: MvsLoadingParameters) -> Result<MvsDataset> {
        parameters.validate()?;
        let (entries, interval_scales) = MvsDataset::build_list(&parameters)?;
        info!("dataset entries: {}, interval_scale: {:?}", entries.len(), interval_scales);

        Ok(MvsDataset {
            parameters,
            entries,
            interval_scales,
            scene_resolutions: HashMap::new()
        })
    }

    fn build_list(parameters: &MvsLoadingParameters) -> Result<(Vec<PairEntry>,HashMap<SceneId,Float>)> {
        let mut entries = Vec::<PairEntry>::new();
        let mut interval_scales = HashMap::<SceneId,Float>::with_capacity(parameters.scenes.len());

        for scene in &parameters.scenes {
            interval_scales.insert(scene.clone(), parameters.interval_scale.for_scene(scene)?);
            let scene_entries = load_scene_entries(&pair_file(&parameters.datapath, scene), scene, parameters.target_view_count, parameters.source_padding)?;
            debug!("scene {}: {} entries", scene, scene_entries.len());
            entries.extend(scene_entries);
        }

        Ok((entries,interval_scales))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PairEntry] {
        &self.entries
    }

    pub fn parameters(&self) -> &MvsLoadingParameters {
        &self.parameters
    }

    pub fn interval_scale(&self, scene: &str) -> Result<Float> {
        self.interval_scales.get(scene).copied()
            .ok_or_else(|| MvsError::Config(format!("no interval scale for scene {}", scene)))
    }

    pub fn scene_resolution(&self, scene: &str) -> Option<Resolution> {
        self.scene_resolutions.get(scene).copied()
    }

    // With `fix_resolution_per_scene` the first sample loaded from a scene fixes the resolution of all
    // later samples of that scene, otherwise each sample is locked to the resolution of its reference view.
    pub fn get_item(&mut self, idx: usize) -> Result<Sample> {
        if !self.parameters.fix_resolution_per_scene {
            return self.get_item_with_lock(idx, ResolutionLock::unlocked()).map(|(sample,_)| sample);
        }

        let scene = self.entry(idx)?.scene.clone();
        let lock = match self.scene_resolutions.get(&scene) {
            Some(&resolution) => ResolutionLock::locked_to(resolution),
            None => ResolutionLock::unlocked()
        };
        let (sample, resolution) = self.get_item_with_lock(idx, lock)?;
        self.scene_resolutions.entry(scene).or_insert(resolution);
        Ok(sample)
    }

    // Assembles sample `idx` under an explicit resolution lock and returns the resolution its views were locked to.
    pub fn get_item_with_lock(&self, idx: usize, mut lock: ResolutionLock) -> Result<(Sample,Resolution)> {
        let entry = self.entry(idx)?;
        let view_ids = entry.view_ids(self.parameters.target_view_count);
        let interval_scale = self.interval_scale(&entry.scene_key)?;
        debug!("loading {} reference view {} with sources {:?}", entry.scene, entry.reference_view, &view_ids[1..]);

        let reference_paths = ViewPaths::new(&self.parameters.datapath, &entry.scene, entry.reference_view);
        let (reference_image, reference_matrix, reference_camera) = self.load_view(&reference_paths, interval_scale, &mut lock)?;
        let depth = load_depth_pyramid(&reference_paths.depth, &self.parameters.pyramid)?;
        let mask = load_mask_pyramid(&reference_paths.mask, &self.parameters.pyramid)?;
        let depth_values = depth_hypotheses(reference_camera.depth_min, reference_camera.depth_interval, self.parameters.target_depth_count)?;

        let mut images = Vec::<ColorImage>::with_capacity(view_ids.len());
        let mut projection_matrices = Vec::<ProjectionMatrix>::with_capacity(view_ids.len());
        images.push(reference_image);
        projection_matrices.push(reference_matrix);

        for &view in &view_ids[1..] {
            let paths = ViewPaths::new(&self.parameters.datapath, &entry.scene, view);
            let (image, projection_matrix, _) = self.load_view(&paths, interval_scale, &mut lock)?;
            images.push(image);
            projection_matrices.push(projection_matrix);
        }

        let images = ImageStack::from_color_images(&images)?;
        let resolution = images.resolution;

        let sample = Sample {
            images,
            projection_matrices: stage_projection_matrices(&projection_matrices),
            depth_values,
            depth,
            mask,
            filename_template: filename_template(&entry.scene, entry.reference_view),
            view_ids
        };

        Ok((sample,resolution))
    }

    fn entry(&self, idx: usize) -> Result<&PairEntry> {
        self.entries.get(idx).ok_or_else(|| MvsError::Config(format!("sample index {} out of range for {} entries", idx, self.entries.len())))
    }

    fn load_view(&self, paths: &ViewPaths, interval_scale: Float, lock: &mut ResolutionLock) -> Result<(ColorImage,ProjectionMatrix,CameraParams)> {
        let image = load_image_as_rgb(paths.image()?)?;
        let camera = load_cam(&paths.cam, interval_scale, self.parameters.target_depth_count)?;
        let (image, intrinsics) = scale_mvs_input(&image, &camera.intrinsics, self.parameters.max_h, self.parameters.max_w, self.parameters.base)?;
        let (image, intrinsics) = lock.apply(image, intrinsics);
        let projection_matrix = ProjectionMatrix::new(&camera.extrinsics, &intrinsics);
        Ok((image,projection_matrix,camera))
    }
}
