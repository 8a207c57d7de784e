//! HTTP handlers for the listing API

use crate::core::company::CompanyRecord;
use crate::core::criteria::{FilterCriteria, ListingParams};
use crate::core::error::DirectoryError;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Success envelope for `GET /api/companies`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<CompanyRecord>,
}

/// `GET /api/companies`
///
/// All query parameters are optional strings; unknown parameters are
/// ignored. Returns the full filtered set sorted by name — pagination is a
/// client concern. Store failures map to the fixed 500 body.
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListResponse>, DirectoryError> {
    let criteria = FilterCriteria::from_params(params);

    let data = state.listing.list(&criteria).await.map_err(|err| {
        tracing::error!(error = %err, "Error fetching companies");
        DirectoryError::store(err.to_string())
    })?;

    Ok(Json(ListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
