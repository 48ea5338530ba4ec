mod filter_op;
mod filter_query;
mod overpass_query;
mod spatial_filter;

pub use filter_op::FilterOp;
pub use filter_query::FilterQuery;
pub use overpass_query::OverpassQuery;
pub use spatial_filter::SpatialFilter;
