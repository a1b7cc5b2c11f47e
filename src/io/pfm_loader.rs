extern crate nalgebra as na;

use std::fs;
use std::path::Path;
use na::DMatrix;

use crate::{MvsError,Result,Float};

#[derive(Debug,Copy,Clone,PartialEq)]
pub struct PfmHeader {
    pub channels: usize,
    pub width: usize,
    pub height: usize,
    pub little_endian: bool
}

pub fn load_pfm(file_path: &Path) -> Result<DMatrix<Float>> {
    let bytes = fs::read(file_path).map_err(|e| MvsError::io(file_path, e))?;
    decode_pfm(&bytes).map_err(|reason| MvsError::format(file_path, reason))
}

pub fn decode_pfm(bytes: &[u8]) -> std::result::Result<DMatrix<Float>, String> {
    let (header, data_offset) = decode_header(bytes)?;
    let PfmHeader { channels, width, height, little_endian } = header;

    let value_count = width.checked_mul(height).and_then(|n| n.checked_mul(channels)).ok_or("pfm dimensions overflow")?;
    let byte_count = value_count.checked_mul(4).ok_or("pfm dimensions overflow")?;
    let payload = &bytes[data_offset..];
    if payload.len() < byte_count {
        return Err(format!("payload holds {} bytes, {} expected", payload.len(), byte_count));
    }

    let mut matrix = DMatrix::<Float>::zeros(height,width);
    for (idx, chunk) in payload.chunks_exact(4).take(value_count).enumerate() {
        if idx % channels != 0 {
            continue;
        }
        let raw = [chunk[0],chunk[1],chunk[2],chunk[3]];
        let value = match little_endian {
            true => f32::from_le_bytes(raw),
            false => f32::from_be_bytes(raw)
        };
        let pixel = idx / channels;
        let stored_row = pixel / width;
        let col = pixel % width;
        // rows are stored bottom to top
        matrix[(height-1-stored_row,col)] = value as Float;
    }

    Ok(matrix)
}

fn decode_header(bytes: &[u8]) -> std::result::Result<(PfmHeader,usize), String> {
    let mut lines = Vec::<&str>::with_capacity(3);
    let mut offset = 0;
    while lines.len() < 3 {
        let end = bytes[offset..].iter().position(|&b| b == b'\n').ok_or("truncated pfm header")?;
        let line = std::str::from_utf8(&bytes[offset..offset+end]).map_err(|_| "pfm header is not ascii")?;
        lines.push(line.trim());
        offset += end + 1;
    }

    let channels = match lines[0] {
        "PF" => 3,
        "Pf" => 1,
        other => return Err(format!("not a pfm file, identifier '{}'", other))
    };

    let dims = lines[1].split_whitespace().map(|t| t.parse::<usize>()).collect::<std::result::Result<Vec<usize>,_>>()
        .map_err(|_| format!("malformed pfm dimensions '{}'", lines[1]))?;
    if dims.len() != 2 || dims[0] == 0 || dims[1] == 0 {
        return Err(format!("malformed pfm dimensions '{}'", lines[1]));
    }

    let scale = lines[2].parse::<f32>().map_err(|_| format!("malformed pfm scale '{}'", lines[2]))?;

    Ok((PfmHeader { channels, width: dims[0], height: dims[1], little_endian: scale < 0.0 }, offset))
}

pub fn encode_pfm(matrix: &DMatrix<Float>) -> Vec<u8> {
    let (height, width) = matrix.shape();
    let mut bytes = format!("Pf\n{} {}\n-1.0\n", width, height).into_bytes();
    bytes.reserve(width*height*4);
    for r in (0..height).rev() {
        for c in 0..width {
            bytes.extend_from_slice(&(matrix[(r,c)] as f32).to_le_bytes());
        }
    }
    bytes
}

pub fn write_pfm(file_path: &Path, matrix: &DMatrix<Float>) -> Result<()> {
    fs::write(file_path, encode_pfm(matrix)).map_err(|e| MvsError::io(file_path, e))
}
