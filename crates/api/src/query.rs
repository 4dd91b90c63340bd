//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?status=&limit=&offset=` for listings filterable by a text-backed
/// status enum. Limits are clamped in the repository layer.
#[derive(Debug, Deserialize)]
pub struct StatusListParams<S> {
    pub status: Option<S>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
