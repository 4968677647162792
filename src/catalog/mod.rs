//! # Catalog Module
//!
//! The coworking space dataset: data model, startup loader, and the
//! immutable in-memory store with point lookups and aggregate listings.

mod model;
mod store;

pub use model::{Amenity, Pricing, Space};
pub use store::{Catalog, CatalogError, CatalogResult};
