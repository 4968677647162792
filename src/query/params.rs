//! # Query Parameter Parsing
//!
//! Translates the raw query-string map into typed pipeline parameters.
//!
//! Malformed input never fails a request here: a numeric parameter that
//! does not parse is treated as absent, and `featured` activates only on
//! the literal "true". Empty values are treated as absent throughout.

use std::collections::HashMap;

/// Sort keys accepted by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending day-pass price
    Price,

    /// Descending rating
    Rating,

    /// Ascending name; the default and the fallback for unknown values
    #[default]
    Name,
}

impl SortKey {
    /// Parse a sort value, case-insensitively
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => SortKey::Name,
        }
    }
}

/// Parsed query parameters, all optional
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Substring to match against name, descriptions, and tags
    pub search: Option<String>,

    /// Exact city match, case-insensitive
    pub city: Option<String>,

    /// Upper bound on `pricing.dayPass`
    pub max_price: Option<f64>,

    /// Substring to match against amenity names and icons
    pub amenity: Option<String>,

    /// Required value of the `featured` flag
    pub featured: Option<bool>,

    pub sort: SortKey,

    /// Page size; absent means everything from `offset` onward
    pub limit: Option<usize>,

    /// Records to skip, 0 when absent or malformed
    pub offset: usize,
}

impl QueryParams {
    /// Parse from the raw query-string map
    pub fn parse(raw: &HashMap<String, String>) -> Self {
        Self {
            search: non_empty(raw.get("search")),
            city: non_empty(raw.get("city")),
            max_price: raw.get("maxPrice").and_then(|v| v.trim().parse().ok()),
            amenity: non_empty(raw.get("amenity")),
            featured: raw.get("featured").and_then(|v| parse_featured(v)),
            sort: raw
                .get("sort")
                .map(|v| SortKey::parse(v))
                .unwrap_or_default(),
            limit: raw.get("limit").and_then(|v| v.trim().parse().ok()),
            offset: raw
                .get("offset")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Only the literal "true" activates the featured filter; any other
/// value leaves it inactive.
fn parse_featured(value: &str) -> Option<bool> {
    value.eq_ignore_ascii_case("true").then_some(true)
}
