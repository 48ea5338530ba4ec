mod crop_error;

pub use crop_error::CropError;
