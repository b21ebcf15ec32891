use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chainlink_core::{DirectoryListing, DirectoryQuery};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct DirectoryResponse {
    listings: Vec<DirectoryListing>,
    /// Dropdown options, independent of the current filters.
    industries: Vec<String>,
    locations: Vec<String>,
}

pub(super) async fn search_directory(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DirectoryQuery>,
) -> Json<ApiResponse<DirectoryResponse>> {
    let directory = &state.directory;
    let data = DirectoryResponse {
        listings: directory.search(&query).into_iter().cloned().collect(),
        industries: directory
            .industries()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
        locations: directory
            .locations()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
    };

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
