mod crop_configuration;

pub use crop_configuration::CropConfiguration;
