//! # Query Module
//!
//! Parameter parsing and the pure filter → sort → paginate pipeline.
//! The pipeline is implemented once and shared by every adapter; adapters
//! only translate transport parameters to and from these types.

mod params;
mod pipeline;

pub use params::{QueryParams, SortKey};
pub use pipeline::{run, Pagination, QueryResult};
