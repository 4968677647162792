//! # Query Pipeline
//!
//! The filter → sort → paginate sequence applied per request to the
//! in-memory collection. Pure computation over a borrowed slice; the
//! collection is never mutated.
//!
//! Filters apply in a fixed order (search, city, maxPrice, amenity,
//! featured) regardless of their order in the query string. All sorts
//! are stable. `total` counts records after filtering, before slicing.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::Space;

use super::params::{QueryParams, SortKey};

/// Pagination metadata returned with every listing.
///
/// `limit`, `offset`, and `hasMore` appear only when the request was
/// paginated; an unpaginated listing carries `total` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl Pagination {
    /// Metadata for an unpaginated listing
    pub fn unpaginated(total: usize) -> Self {
        Self {
            total,
            limit: None,
            offset: None,
            has_more: None,
        }
    }

    /// Metadata for a `[offset, offset+limit)` page
    pub fn page(total: usize, limit: usize, offset: usize) -> Self {
        Self {
            total,
            limit: Some(limit),
            offset: Some(offset),
            has_more: Some(offset + limit < total),
        }
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub data: Vec<Space>,
    pub pagination: Pagination,
}

/// Run the pipeline over the collection
pub fn run(spaces: &[Space], params: &QueryParams) -> QueryResult {
    let mut rows: Vec<&Space> = spaces.iter().filter(|s| matches(s, params)).collect();
    sort_rows(&mut rows, params.sort);

    let total = rows.len();
    let (pagination, page): (Pagination, Vec<&Space>) = match params.limit {
        Some(limit) => (
            Pagination::page(total, limit, params.offset),
            rows.into_iter().skip(params.offset).take(limit).collect(),
        ),
        None => (
            Pagination::unpaginated(total),
            rows.into_iter().skip(params.offset).collect(),
        ),
    };

    QueryResult {
        data: page.into_iter().cloned().collect(),
        pagination,
    }
}

/// Whether a record passes every active filter
fn matches(space: &Space, params: &QueryParams) -> bool {
    if let Some(term) = &params.search {
        if !matches_search(space, &term.to_lowercase()) {
            return false;
        }
    }

    if let Some(city) = &params.city {
        if space.city.to_lowercase() != city.to_lowercase() {
            return false;
        }
    }

    if let Some(max_price) = params.max_price {
        if space.pricing.day_pass > max_price {
            return false;
        }
    }

    if let Some(needle) = &params.amenity {
        if !matches_amenity(space, &needle.to_lowercase()) {
            return false;
        }
    }

    if let Some(featured) = params.featured {
        if space.featured != featured {
            return false;
        }
    }

    true
}

/// Substring match against name, both descriptions, or any tag
fn matches_search(space: &Space, term: &str) -> bool {
    space.name.to_lowercase().contains(term)
        || space.description.to_lowercase().contains(term)
        || space.short_description.to_lowercase().contains(term)
        || space.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Substring match against an amenity's name or icon identifier
fn matches_amenity(space: &Space, needle: &str) -> bool {
    space.amenities.iter().any(|a| {
        a.name.to_lowercase().contains(needle)
            || a.icon
                .as_ref()
                .map_or(false, |icon| icon.to_lowercase().contains(needle))
    })
}

fn sort_rows(rows: &mut [&Space], key: SortKey) {
    match key {
        SortKey::Price => rows.sort_by(|a, b| {
            a.pricing
                .day_pass
                .partial_cmp(&b.pricing.day_pass)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Rating => rows.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        SortKey::Name => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Case-insensitive name ordering; distinct raw spellings tie-break
/// bytewise so the order stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn space(id: u64, name: &str, city: &str, day_pass: f64, rating: f64, featured: bool) -> Space {
        serde_json::from_value(json!({
            "id": id,
            "slug": format!("space-{id}"),
            "name": name,
            "description": format!("Coworking {name} con salas de reuniones."),
            "shortDescription": "Espacio de trabajo",
            "city": city,
            "address": "Calle Mayor 1",
            "postalCode": "46001",
            "tags": ["startups"],
            "amenities": [
                {"name": "Wifi de alta velocidad", "icon": "wifi"},
                {"name": "Café ilimitado", "icon": "coffee"}
            ],
            "pricing": {
                "dayPass": day_pass,
                "weekPass": day_pass * 4.0,
                "monthlyHotDesk": day_pass * 8.0,
                "monthlyFixedDesk": day_pass * 11.0,
                "privateOffice": day_pass * 25.0
            },
            "rating": rating,
            "reviews": 10,
            "featured": featured,
            "capacity": 40,
            "mainImage": "/images/space.jpg",
            "images": [],
            "openingHours": null,
            "phone": "+34 960 000 000",
            "email": "hola@example.com",
            "website": "https://example.com"
        }))
        .unwrap()
    }

    fn fixture() -> Vec<Space> {
        vec![
            space(1, "Wayco Valencia", "Valencia", 22.0, 4.8, true),
            space(2, "Vortex", "Valencia", 18.0, 4.5, false),
            space(3, "Utopicus", "Madrid", 28.0, 4.7, true),
            space(4, "Aticco", "Barcelona", 26.0, 4.7, false),
            space(5, "La Térmica", "Málaga", 16.0, 4.3, false),
        ]
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::parse(&raw)
    }

    fn ids(result: &QueryResult) -> Vec<u64> {
        result.data.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_no_params_returns_all_sorted_by_name() {
        let result = run(&fixture(), &params(&[]));

        assert_eq!(ids(&result), vec![4, 5, 3, 2, 1]);
        assert_eq!(result.pagination, Pagination::unpaginated(5));
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let result = run(&fixture(), &params(&[("search", "WAYCO")]));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_search_matches_description_and_tags() {
        // every fixture description contains "salas"
        let by_description = run(&fixture(), &params(&[("search", "salas")]));
        assert_eq!(by_description.pagination.total, 5);

        let by_tag = run(&fixture(), &params(&[("search", "startup")]));
        assert_eq!(by_tag.pagination.total, 5);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let result = run(&fixture(), &params(&[("search", "nonexistentcoworking")]));

        assert!(result.data.is_empty());
        assert_eq!(result.pagination.total, 0);
    }

    #[test]
    fn test_city_exact_match_case_insensitive() {
        let result = run(&fixture(), &params(&[("city", "valencia")]));
        assert_eq!(result.pagination.total, 2);
        assert!(result.data.iter().all(|s| s.city == "Valencia"));

        // substring is not enough for the city filter
        let partial = run(&fixture(), &params(&[("city", "valen")]));
        assert_eq!(partial.pagination.total, 0);
    }

    #[test]
    fn test_max_price_threshold_is_inclusive() {
        let result = run(&fixture(), &params(&[("maxPrice", "22")]));

        assert_eq!(result.pagination.total, 3);
        assert!(result.data.iter().all(|s| s.pricing.day_pass <= 22.0));
    }

    #[test]
    fn test_malformed_max_price_filters_nothing() {
        let result = run(&fixture(), &params(&[("maxPrice", "cheap")]));
        assert_eq!(result.pagination.total, 5);
    }

    #[test]
    fn test_amenity_matches_name_or_icon() {
        let by_name = run(&fixture(), &params(&[("amenity", "café")]));
        assert_eq!(by_name.pagination.total, 5);

        let by_icon = run(&fixture(), &params(&[("amenity", "coffee")]));
        assert_eq!(by_icon.pagination.total, 5);

        let missing = run(&fixture(), &params(&[("amenity", "piscina")]));
        assert_eq!(missing.pagination.total, 0);
    }

    #[test]
    fn test_featured_filter() {
        let result = run(&fixture(), &params(&[("featured", "true")]));

        assert_eq!(ids(&result), vec![3, 1]);
        assert!(result.data.iter().all(|s| s.featured));

        // anything but the literal "true" leaves the filter inactive
        let inactive = run(&fixture(), &params(&[("featured", "false")]));
        assert_eq!(inactive.pagination.total, 5);
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let result = run(&fixture(), &params(&[("sort", "price")]));

        let prices: Vec<f64> = result.data.iter().map(|s| s.pricing.day_pass).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let result = run(&fixture(), &params(&[("sort", "rating")]));

        let ratings: Vec<f64> = result.data.iter().map(|s| s.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_rating_sort_is_stable() {
        // ids 3 and 4 share rating 4.7; dataset order must be preserved
        let result = run(&fixture(), &params(&[("sort", "rating")]));
        assert_eq!(ids(&result), vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_pagination_slice_and_metadata() {
        let result = run(&fixture(), &params(&[("limit", "2"), ("offset", "1")]));

        assert_eq!(ids(&result), vec![5, 3]);
        assert_eq!(result.pagination, Pagination::page(5, 2, 1));
        assert_eq!(result.pagination.has_more, Some(true));

        let last_page = run(&fixture(), &params(&[("limit", "2"), ("offset", "4")]));
        assert_eq!(last_page.data.len(), 1);
        assert_eq!(last_page.pagination.has_more, Some(false));
    }

    #[test]
    fn test_offset_without_limit_keeps_metadata_minimal() {
        let result = run(&fixture(), &params(&[("offset", "3")]));

        assert_eq!(result.data.len(), 2);
        assert_eq!(result.pagination, Pagination::unpaginated(5));
    }

    #[test]
    fn test_offset_beyond_total_yields_empty_page() {
        let result = run(&fixture(), &params(&[("limit", "2"), ("offset", "10")]));

        assert!(result.data.is_empty());
        assert_eq!(result.pagination.total, 5);
        assert_eq!(result.pagination.has_more, Some(false));
    }

    #[test]
    fn test_total_is_independent_of_pagination() {
        let unpaged = run(&fixture(), &params(&[("city", "Valencia")]));
        let paged = run(
            &fixture(),
            &params(&[("city", "Valencia"), ("limit", "1"), ("offset", "1")]),
        );

        assert_eq!(unpaged.pagination.total, paged.pagination.total);
    }

    #[test]
    fn test_combined_filters() {
        let result = run(
            &fixture(),
            &params(&[("city", "Valencia"), ("maxPrice", "20"), ("sort", "rating")]),
        );

        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let value = serde_json::to_value(Pagination::page(12, 2, 0)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"total": 12, "limit": 2, "offset": 0, "hasMore": true})
        );

        let bare = serde_json::to_value(Pagination::unpaginated(12)).unwrap();
        assert_eq!(bare, serde_json::json!({"total": 12}));
    }
}
