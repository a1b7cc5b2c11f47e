extern crate image as image_rs;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead,BufReader};
use crate::image::{Image,color_image::ColorImage};
use crate::{MvsError,Result,SceneId,Float};

pub mod loading_parameters;
pub mod pair_loader;
pub mod cam_loader;
pub mod pfm_loader;


pub fn parse_to_float(string: &str, file_path: &Path, line_idx: usize) -> Result<Float> {
    string.parse::<Float>().map_err(|_| MvsError::format(file_path, format!("line {}: '{}' is not a float", line_idx, string)))
}

pub fn parse_to_index(string: &str, file_path: &Path, line_idx: usize) -> Result<usize> {
    string.parse::<usize>().map_err(|_| MvsError::format(file_path, format!("line {}: '{}' is not a view index", line_idx, string)))
}

pub fn parse_float_block(lines: &[String], range: std::ops::Range<usize>, file_path: &Path) -> Result<Vec<Float>> {
    if lines.len() < range.end {
        return Err(MvsError::format(file_path, format!("expected at least {} lines, found {}", range.end, lines.len())));
    }

    let mut values = Vec::<Float>::new();
    for line_idx in range {
        for token in lines[line_idx].split_whitespace() {
            values.push(parse_to_float(token, file_path, line_idx)?);
        }
    }
    Ok(values)
}

pub fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).map_err(|e| MvsError::io(file_path, e))?;
    let reader = BufReader::new(file);
    reader.lines()
        .map(|line| line.map(|l| l.trim_end().to_string()).map_err(|e| MvsError::io(file_path, e)))
        .collect::<Result<Vec<String>>>()
}

pub fn load_scene_list(file_path: &Path) -> Result<Vec<SceneId>> {
    let lines = read_lines(file_path)?;
    Ok(lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()).map(String::from).collect::<Vec<SceneId>>())
}

pub fn load_image_as_rgb(file_path: &Path) -> Result<ColorImage> {
    let dynamic_image = image_rs::open(file_path).map_err(|e| decode_error(file_path, e))?;
    Ok(ColorImage::from_dynamic_image(&dynamic_image))
}

pub fn load_image_as_gray(file_path: &Path) -> Result<Image> {
    let gray_image = image_rs::open(file_path).map_err(|e| decode_error(file_path, e))?.to_luma8();
    Ok(Image::from_gray_image(&gray_image))
}

fn decode_error(file_path: &Path, error: image_rs::ImageError) -> MvsError {
    match error {
        image_rs::ImageError::IoError(source) => MvsError::io(file_path, source),
        source => MvsError::Decode { path: file_path.to_path_buf(), source }
    }
}
