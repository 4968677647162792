//! # Space Data Model
//!
//! Record types for one coworking location. Records are loaded once at
//! startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One amenity of a space.
///
/// Dataset variants carry amenities either as plain strings ("Wifi") or as
/// `{name, icon}` objects; both deserialize into this single shape, with
/// `icon` absent for the plain form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AmenityRepr")]
pub struct Amenity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Amenity {
    /// Create an amenity with an icon identifier
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: Some(icon.into()),
        }
    }

    /// Create an amenity without an icon
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }
}

/// Raw wire forms accepted for an amenity
#[derive(Deserialize)]
#[serde(untagged)]
enum AmenityRepr {
    Plain(String),
    Detailed { name: String, icon: Option<String> },
}

impl From<AmenityRepr> for Amenity {
    fn from(repr: AmenityRepr) -> Self {
        match repr {
            AmenityRepr::Plain(name) => Amenity { name, icon: None },
            AmenityRepr::Detailed { name, icon } => Amenity { name, icon },
        }
    }
}

/// Price table for a space.
///
/// Only `dayPass` participates in filtering and sorting; the remaining
/// rates are passthrough data for the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub day_pass: f64,
    pub week_pass: f64,
    pub monthly_hot_desk: f64,
    pub monthly_fixed_desk: f64,
    pub private_office: f64,
}

/// One coworking location's full descriptive data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Positive integer, unique across the collection
    pub id: u64,

    /// URL-safe identifier, unique across the collection
    pub slug: String,

    pub name: String,
    pub description: String,
    pub short_description: String,

    /// Compared case-insensitively by the city filter
    pub city: String,

    pub address: String,
    pub postal_code: String,

    /// Used only for search matching
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub amenities: Vec<Amenity>,

    pub pricing: Pricing,

    pub rating: f64,
    pub reviews: u32,
    pub featured: bool,
    pub capacity: u32,

    pub main_image: String,
    #[serde(default)]
    pub images: Vec<String>,

    /// Opaque passthrough, shape unspecified
    #[serde(default)]
    pub opening_hours: Value,

    pub phone: String,
    pub email: String,
    pub website: String,
}
