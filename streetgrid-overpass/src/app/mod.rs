pub mod convert_ops;
pub mod fetch_ops;
pub mod prompt_ops;
mod streets_app;

pub use fetch_ops::OverpassClient;
pub use streets_app::{run_street_fetch, StreetsCliArguments};
