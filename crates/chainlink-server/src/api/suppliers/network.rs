use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chainlink_core::{network_view, NetworkStats, StatusFilter};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::super::{parse_param, ApiError, ApiResponse, AppState, ResponseMeta};
use super::SupplierItem;

#[derive(Debug, Deserialize)]
pub(in crate::api) struct NetworkQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct NetworkResponse {
    suppliers: Vec<SupplierItem>,
    /// Counts over every connected supplier, ignoring the current filters.
    stats: NetworkStats,
}

pub(in crate::api) async fn get_network(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NetworkQuery>,
) -> Result<Json<ApiResponse<NetworkResponse>>, ApiError> {
    let status: Option<StatusFilter> = parse_param(&req_id.0, "status", params.status.as_deref())?;
    let search = params.search.unwrap_or_default();

    let session = state.session.lock().await;
    let data = NetworkResponse {
        suppliers: network_view(session.suppliers(), &search, status.unwrap_or_default())
            .into_iter()
            .map(SupplierItem::from)
            .collect(),
        stats: NetworkStats::from_suppliers(session.suppliers()),
    };
    drop(session);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
