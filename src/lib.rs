
pub mod error;
pub mod io;
pub mod image;
pub mod camera;
pub mod pyramid;
pub mod dataset;

pub use self::error::{MvsError,Result};
pub use self::dataset::{MvsDataset,sample::Sample};
pub use self::io::loading_parameters::MvsLoadingParameters;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

// Imagery and depth maps are stored as 32 bit floats on disk
define_float!(f32);

pub type SceneId = String;
pub type ViewIndex = usize;

pub const DEFAULT_DEPTH_COUNT: usize = 192;
pub const DEFAULT_INTERVAL_SCALE: Float = 1.06;
pub const DEFAULT_RESOLUTION_BASE: usize = 32;
