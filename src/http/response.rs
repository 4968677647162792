//! # Response Envelopes
//!
//! The `{success, ...}` JSON wrappers returned by every endpoint.

use serde::Serialize;

use crate::query::Pagination;

use super::errors::ApiError;

/// Listing envelope with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct ListEnvelope<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> ListEnvelope<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}

/// Single-value envelope (point lookups and aggregates)
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope; `stack` appears only for exposed internal faults
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(err: &ApiError) -> Self {
        let stack = match err {
            ApiError::Internal { detail } => detail.clone(),
            _ => None,
        };
        Self {
            success: false,
            message: err.to_string(),
            stack,
        }
    }
}
