use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chainlink_core::{all_specialties, run_query, SortKey, StatusFilter, SupplierQuery};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::super::{parse_param, ApiError, ApiResponse, AppState, ResponseMeta};
use super::SupplierItem;

#[derive(Debug, Deserialize)]
pub(in crate::api) struct SupplierListQuery {
    pub search: Option<String>,
    /// Comma-separated specialty tags.
    pub specialties: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

fn split_specialties(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

pub(in crate::api) async fn list_suppliers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SupplierListQuery>,
) -> Result<Json<ApiResponse<Vec<SupplierItem>>>, ApiError> {
    let status: Option<StatusFilter> = parse_param(&req_id.0, "status", params.status.as_deref())?;
    let sort: Option<SortKey> = parse_param(&req_id.0, "sort", params.sort.as_deref())?;

    let query = SupplierQuery {
        search: params.search.unwrap_or_default(),
        specialties: split_specialties(params.specialties.as_deref()),
        status: status.unwrap_or_default(),
        sort,
    };

    let session = state.session.lock().await;
    let data: Vec<SupplierItem> = run_query(session.suppliers(), &query)
        .into_iter()
        .map(SupplierItem::from)
        .collect();
    drop(session);

    tracing::debug!(matches = data.len(), "supplier query finished");

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(in crate::api) async fn list_specialties(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let data = all_specialties(state.session.lock().await.suppliers());
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_specialties_trims_and_drops_blanks() {
        assert_eq!(
            split_specialties(Some(" Aluminum , ,Titanium")),
            vec!["Aluminum".to_string(), "Titanium".to_string()]
        );
        assert!(split_specialties(None).is_empty());
    }
}
