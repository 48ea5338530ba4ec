mod crop_cli;
pub mod crop_ops;

pub use crop_cli::CropCliArguments;
