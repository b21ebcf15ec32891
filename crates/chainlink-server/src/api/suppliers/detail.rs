use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chainlink_core::{sort_materials, MaterialSort, MaterialSortField, SortDirection, Supplier};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::super::{parse_param, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct DetailQuery {
    pub sort_field: Option<String>,
    pub direction: Option<String>,
}

/// Full supplier record whose `materials` are ordered by `material_sort`.
/// `connection_status` is cleared for unconnected suppliers, as in list views.
#[derive(Debug, Serialize)]
pub(in crate::api) struct SupplierDetail {
    #[serde(flatten)]
    supplier: Supplier,
    material_sort: MaterialSort,
}

pub(in crate::api) async fn get_supplier(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
    Query(params): Query<DetailQuery>,
) -> Result<Json<ApiResponse<SupplierDetail>>, ApiError> {
    let field: Option<MaterialSortField> =
        parse_param(&req_id.0, "sort_field", params.sort_field.as_deref())?;
    let direction: Option<SortDirection> =
        parse_param(&req_id.0, "direction", params.direction.as_deref())?;
    let material_sort = MaterialSort::new(field.unwrap_or_default(), direction.unwrap_or_default());

    let session = state.session.lock().await;
    let Some(found) = session.find(&id) else {
        tracing::debug!(supplier_id = %id, "supplier lookup missed");
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("supplier '{id}' not found"),
        ));
    };

    let mut supplier = found.clone();
    drop(session);
    supplier.connection_status = supplier.effective_status();
    supplier.materials = sort_materials(&supplier.materials, material_sort);

    Ok(Json(ApiResponse {
        data: SupplierDetail {
            supplier,
            material_sort,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
