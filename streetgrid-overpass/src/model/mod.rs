mod coordinate_order;
mod overpass_error;
pub mod query;
pub mod response;

pub use coordinate_order::CoordinateOrder;
pub use overpass_error::OverpassError;
