use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chainlink_core::CoreError;

use crate::middleware::RequestId;

use super::super::{ApiError, ApiResponse, AppState, ResponseMeta};
use super::SupplierItem;

/// Move an unconnected supplier to `pending`. Connected suppliers are
/// returned unchanged.
pub(in crate::api) async fn connect_supplier(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SupplierItem>>, ApiError> {
    let mut session = state.session.lock().await;
    let data = match session.connect(&id) {
        Ok(supplier) => SupplierItem::from(supplier),
        Err(e @ CoreError::SupplierNotFound(_)) => {
            tracing::debug!(supplier_id = %id, "connect target not found");
            return Err(ApiError::new(req_id.0, "not_found", e.to_string()));
        }
    };
    drop(session);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
