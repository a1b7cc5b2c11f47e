extern crate image as image_rs;

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MvsError>;

#[derive(Debug, Error)]
pub enum MvsError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("malformed file {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("none of the candidate files exist: {candidates:?}")]
    MissingFile { candidates: Vec<PathBuf> },
    #[error("could not decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError,
    },
}

impl MvsError {
    pub fn format<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> MvsError {
        MvsError::Format { path: path.into(), reason: reason.into() }
    }

    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> MvsError {
        MvsError::Io { path: path.into(), source }
    }
}
