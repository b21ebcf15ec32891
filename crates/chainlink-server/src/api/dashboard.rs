use axum::{extract::State, Extension, Json};
use chainlink_core::DashboardOverview;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DashboardOverview>> {
    Json(ApiResponse {
        data: DashboardOverview::clone(&state.dashboard),
        meta: ResponseMeta::new(req_id.0),
    })
}
