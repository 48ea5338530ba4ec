use crate::model::CropError;
use serde::{Deserialize, Serialize};
use streetgrid_core::{model::BoundingBox, util::config_ops};

pub const DEFAULT_INPUT_FILE: &str = "maps/detroit.geojson";
pub const DEFAULT_OUTPUT_FILE: &str = "cropped_detroit.geojson";

/// downtown Detroit as (xmin, ymin, xmax, ymax)
pub const DEFAULT_EXTENT: (f64, f64, f64, f64) = (-83.057379, 42.329023, -83.038781, 42.336422);

/// defines the inputs and outputs of a crop run
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CropConfiguration {
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    bbox: Option<BoundingBox>,
}

impl Default for CropConfiguration {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            bbox: None,
        }
    }
}

impl CropConfiguration {
    pub fn new(input_file: String, output_file: String, bbox: BoundingBox) -> Self {
        Self {
            input_file,
            output_file,
            bbox: Some(bbox),
        }
    }

    /// the configured crop extent, falling back to the downtown Detroit extent
    pub fn get_bbox(&self) -> Result<BoundingBox, CropError> {
        match self.bbox {
            Some(bbox) => Ok(bbox),
            None => {
                let (xmin, ymin, xmax, ymax) = DEFAULT_EXTENT;
                BoundingBox::from_extent(xmin, ymin, xmax, ymax)
                    .map_err(CropError::InvalidBoundingBox)
            }
        }
    }
}

impl TryFrom<&String> for CropConfiguration {
    type Error = CropError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        config_ops::read_configuration_file(f).map_err(CropError::ConfigurationError)
    }
}

fn default_input_file() -> String {
    String::from(DEFAULT_INPUT_FILE)
}

fn default_output_file() -> String {
    String::from(DEFAULT_OUTPUT_FILE)
}
