//! # API Routes
//!
//! Maps `/api` paths to catalog and pipeline operations.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::{Amenity, Catalog, Space};
use crate::query::{self, QueryParams};

use super::errors::{ApiError, ApiResult};
use super::response::{DataEnvelope, ListEnvelope};

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
}

impl ApiState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

/// Build the `/api` route table
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/coworkings", get(list_coworkings))
        .route("/coworkings/{id}", get(get_coworking))
        .route("/coworkings/slug/{slug}", get(get_coworking_by_slug))
        .route("/cities", get(list_cities))
        .route("/amenities", get(list_amenities))
        .fallback(route_not_found)
        .with_state(state)
}

/// GET /api/coworkings: filtered, sorted, optionally paginated listing
async fn list_coworkings(
    State(state): State<ApiState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Json<ListEnvelope<Space>> {
    let params = QueryParams::parse(&raw);
    let result = query::run(state.catalog.spaces(), &params);
    Json(ListEnvelope::new(result.data, result.pagination))
}

/// GET /api/coworkings/{id}: point lookup by numeric id
async fn get_coworking(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataEnvelope<Space>>> {
    if !is_numeric_id(&id) {
        return Err(ApiError::InvalidId(id));
    }

    let space = id
        .parse::<u64>()
        .ok()
        .and_then(|id| state.catalog.find_by_id(id))
        .ok_or(ApiError::SpaceNotFound)?;

    Ok(Json(DataEnvelope::new(space.clone())))
}

/// GET /api/coworkings/slug/{slug}: point lookup by slug
async fn get_coworking_by_slug(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<DataEnvelope<Space>>> {
    let space = state
        .catalog
        .find_by_slug(&slug)
        .ok_or(ApiError::SpaceNotFound)?;

    Ok(Json(DataEnvelope::new(space.clone())))
}

/// GET /api/cities: distinct cities, sorted
async fn list_cities(State(state): State<ApiState>) -> Json<DataEnvelope<Vec<String>>> {
    Json(DataEnvelope::new(state.catalog.cities()))
}

/// GET /api/amenities: distinct amenities, deduplicated by name
async fn list_amenities(State(state): State<ApiState>) -> Json<DataEnvelope<Vec<Amenity>>> {
    Json(DataEnvelope::new(state.catalog.amenities()))
}

/// Fallback for unmatched paths under the API prefix
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// The id path segment must be all digits before lookup is attempted
fn is_numeric_id(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
