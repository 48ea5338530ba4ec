use super::crop_ops;
use crate::{config::CropConfiguration, model::CropError};
use clap::Parser;

/// crops a GeoJSON FeatureCollection to the features that intersect a bounding box
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CropCliArguments {
    /// path to a .toml or .json file overriding the default input, output and bbox
    #[arg(long)]
    pub configuration_file: Option<String>,
}

impl CropCliArguments {
    pub fn run(&self) -> Result<(), CropError> {
        let conf = match &self.configuration_file {
            None => Ok(CropConfiguration::default()),
            Some(f) => {
                log::info!("reading crop configuration from {f}");
                CropConfiguration::try_from(f)
            }
        }?;
        crop_ops::run(&conf)?;
        Ok(())
    }
}
