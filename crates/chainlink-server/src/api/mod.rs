mod dashboard;
mod directory;
mod suppliers;

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chainlink_core::{Catalog, DashboardOverview, Directory, SupplierSession};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

/// Shared handler state.
///
/// The supplier session is a working copy of the catalog that lives as long
/// as the process; `connect` mutates it under the mutex.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SupplierSession>>,
    pub directory: Arc<Directory>,
    pub dashboard: Arc<DashboardOverview>,
}

impl AppState {
    pub fn new(catalog: &Catalog, directory: Directory, dashboard: DashboardOverview) -> Self {
        Self {
            session: Arc::new(Mutex::new(SupplierSession::new(catalog))),
            directory: Arc::new(directory),
            dashboard: Arc::new(dashboard),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    suppliers: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Parse an optional enum-like query parameter. Missing and empty values are
/// both `None`; anything unparseable is a `bad_request`.
pub(super) fn parse_param<T>(
    request_id: &str,
    name: &str,
    raw: Option<&str>,
) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = String>,
{
    raw.filter(|value| !value.is_empty())
        .map(|value| {
            value.parse::<T>().map_err(|reason| {
                ApiError::new(
                    request_id,
                    "bad_request",
                    format!("invalid `{name}` parameter: {reason}"),
                )
            })
        })
        .transpose()
}

/// Build the CORS layer. `None` allows any origin; otherwise only `origin`.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn build_cors(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ]);

    match origin {
        None => Ok(layer.allow_origin(tower_http::cors::Any)),
        Some(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))?;
            Ok(layer.allow_origin(value))
        }
    }
}

pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/suppliers", get(suppliers::list_suppliers))
        .route(
            "/api/v1/suppliers/specialties",
            get(suppliers::list_specialties),
        )
        .route("/api/v1/suppliers/network", get(suppliers::get_network))
        .route("/api/v1/suppliers/{id}", get(suppliers::get_supplier))
        .route(
            "/api/v1/suppliers/{id}/connect",
            post(suppliers::connect_supplier),
        )
        .route("/api/v1/directory", get(directory::search_directory))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let suppliers = state.session.lock().await.suppliers().len();
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            suppliers,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
