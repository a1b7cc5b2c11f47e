extern crate mvs_loader;

use std::path::Path;
use color_eyre::eyre::{Result,WrapErr};
use log::info;
use mvs_loader::{MvsDataset,MvsLoadingParameters};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config_path = std::env::var("MVS_CONFIG").unwrap_or_else(|_| String::from("config/dtu_eval.yaml"));
    let parameters = MvsLoadingParameters::from_yaml_file(Path::new(&config_path)).wrap_err_with(|| format!("loading {}", config_path))?;
    let mut dataset = MvsDataset::new(parameters)?;
    info!("{} samples under {}", dataset.len(), dataset.parameters().datapath.display());

    for idx in 0..dataset.len() {
        let sample = dataset.get_item(idx)?;
        let (views, channels, height, width) = sample.images.shape();
        info!("{}: images {}x{}x{}x{}, depth hypotheses {}, depth stage3 {:?}",
            sample.filename("", ""), views, channels, height, width, sample.depth_values.len(), sample.depth.stage3.buffer.shape());
    }

    Ok(())
}
