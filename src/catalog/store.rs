//! # Catalog Store
//!
//! Loads the space dataset once at startup and answers point lookups and
//! aggregate listings from the immutable in-memory collection. A dataset
//! that cannot be read, parsed, or validated is a fatal startup error;
//! the process refuses to serve.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::model::{Amenity, Space};

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Dataset loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("cannot read dataset '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Dataset file is not a valid space collection
    #[error("malformed dataset '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Two records share an id
    #[error("duplicate space id {0}")]
    DuplicateId(u64),

    /// Two records share a slug
    #[error("duplicate space slug '{0}'")]
    DuplicateSlug(String),

    /// A record carries an empty slug
    #[error("space {0} has an empty slug")]
    EmptySlug(u64),
}

/// Immutable in-memory collection of spaces.
///
/// Constructed once (from a file or an injected vector) and shared
/// read-only between requests; nothing ever writes back to it.
#[derive(Debug, Clone)]
pub struct Catalog {
    spaces: Vec<Space>,
}

impl Catalog {
    /// Build a catalog from an in-memory collection.
    ///
    /// Validates the uniqueness invariants the lookups rely on.
    pub fn new(spaces: Vec<Space>) -> CatalogResult<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for space in &spaces {
            if space.slug.is_empty() {
                return Err(CatalogError::EmptySlug(space.id));
            }
            if !ids.insert(space.id) {
                return Err(CatalogError::DuplicateId(space.id));
            }
            if !slugs.insert(space.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(space.slug.clone()));
            }
        }

        Ok(Self { spaces })
    }

    /// Load and validate the dataset from a JSON file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let spaces: Vec<Space> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Self::new(spaces)
    }

    /// All records in dataset order
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Point lookup by id; at most one match by the uniqueness invariant
    pub fn find_by_id(&self, id: u64) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    /// Point lookup by slug; exact match, no normalization
    pub fn find_by_slug(&self, slug: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.slug == slug)
    }

    /// Distinct city values, lexicographically sorted
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .spaces
            .iter()
            .map(|s| s.city.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        cities.sort();
        cities
    }

    /// Distinct amenities, deduplicated by display name and sorted by it.
    ///
    /// The first occurrence wins, so the full object (icon included) is
    /// preserved for the listing.
    pub fn amenities(&self) -> Vec<Amenity> {
        let mut seen = HashSet::new();
        let mut amenities = Vec::new();

        for space in &self.spaces {
            for amenity in &space.amenities {
                if seen.insert(amenity.name.clone()) {
                    amenities.push(amenity.clone());
                }
            }
        }

        amenities.sort_by(|a, b| a.name.cmp(&b.name));
        amenities
    }
}
