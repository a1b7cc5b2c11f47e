extern crate nalgebra as na;

use std::path::Path;
use na::{Matrix3,Matrix4};

use crate::io::{read_lines,parse_float_block,parse_to_float};
use crate::camera::CameraParams;
use crate::{MvsError,Result,Float};

const EXTRINSIC_LINES: std::ops::Range<usize> = 1..5;
const INTRINSIC_LINES: std::ops::Range<usize> = 7..10;
const DEPTH_LINE: usize = 11;

// Intrinsics are stored for the full sensor resolution, the imagery is decimated by this factor.
pub const INTRINSIC_DECIMATION: Float = 4.0;

// extrinsic 4x4, intrinsic 3x3, then depth_min depth_interval [depth_count [depth_max]]
// a depth count re-derives the interval so the range is covered by target_depth_count hypotheses
pub fn load_cam(file_path: &Path, interval_scale: Float, target_depth_count: usize) -> Result<CameraParams> {
    let lines = read_lines(file_path)?;
    if lines.len() <= DEPTH_LINE {
        return Err(MvsError::format(file_path, format!("expected at least {} lines, found {}", DEPTH_LINE + 1, lines.len())));
    }

    let extrinsic_values = parse_float_block(&lines, EXTRINSIC_LINES, file_path)?;
    if extrinsic_values.len() != 16 {
        return Err(MvsError::format(file_path, format!("extrinsics need 16 values, found {}", extrinsic_values.len())));
    }
    let intrinsic_values = parse_float_block(&lines, INTRINSIC_LINES, file_path)?;
    if intrinsic_values.len() != 9 {
        return Err(MvsError::format(file_path, format!("intrinsics need 9 values, found {}", intrinsic_values.len())));
    }

    let extrinsics = Matrix4::<Float>::from_row_slice(&extrinsic_values);
    let mut intrinsics = Matrix3::<Float>::from_row_slice(&intrinsic_values);
    for r in 0..2 {
        let row = intrinsics.row(r) / INTRINSIC_DECIMATION;
        intrinsics.set_row(r, &row);
    }

    let depth_tokens = lines[DEPTH_LINE].split_whitespace().collect::<Vec<&str>>();
    if depth_tokens.len() < 2 {
        return Err(MvsError::format(file_path, format!("line {}: expected depth_min and depth_interval", DEPTH_LINE)));
    }
    let depth_min = parse_to_float(depth_tokens[0], file_path, DEPTH_LINE)?;
    let mut depth_interval = parse_to_float(depth_tokens[1], file_path, DEPTH_LINE)?;

    if let Some(count_token) = depth_tokens.get(2) {
        let depth_count = parse_to_float(count_token, file_path, DEPTH_LINE)?.trunc();
        let depth_max = depth_min + depth_count*depth_interval;
        depth_interval = (depth_max - depth_min) / target_depth_count as Float;
    }

    depth_interval *= interval_scale;

    Ok(CameraParams { intrinsics, extrinsics, depth_min, depth_interval })
}

pub fn cam_to_string(intrinsics: &Matrix3<Float>, extrinsics: &Matrix4<Float>, depth_min: Float, depth_interval: Float) -> String {
    let mut contents = String::from("extrinsic\n");
    for r in 0..4 {
        let row = (0..4).map(|c| extrinsics[(r,c)].to_string()).collect::<Vec<String>>().join(" ");
        contents.push_str(&row);
        contents.push('\n');
    }
    contents.push_str("\nintrinsic\n");
    for r in 0..3 {
        let row = (0..3).map(|c| intrinsics[(r,c)].to_string()).collect::<Vec<String>>().join(" ");
        contents.push_str(&row);
        contents.push('\n');
    }
    contents.push_str(&format!("\n{} {}\n", depth_min, depth_interval));
    contents
}
