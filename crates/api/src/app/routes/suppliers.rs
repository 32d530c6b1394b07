use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use nexus_core::SupplierId;
use nexus_infra::AppServices;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_supplier).get(list_suppliers))
        .route("/:id", get(get_supplier))
        .route("/:id/payments", post(record_payment))
        .route("/:id/toggle-status", post(toggle_status))
}

async fn register_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::RegisterSupplierRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "suppliers.manage") {
        return resp;
    }
    match services
        .suppliers
        .register(&body.name, &body.company_name, &body.phone, &body.location)
    {
        Ok(supplier) => (StatusCode::CREATED, Json(supplier)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn record_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::SupplierPaymentRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "suppliers.manage") {
        return resp;
    }
    let id: SupplierId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
    match services
        .suppliers
        .record_payment(id, body.amount, date, body.method)
    {
        Ok(supplier) => (StatusCode::OK, Json(supplier)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn toggle_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "suppliers.manage") {
        return resp;
    }
    let id: SupplierId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.suppliers.toggle_status(id) {
        Ok(supplier) => (StatusCode::OK, Json(supplier)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SupplierId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.suppliers.get(id) {
        Some(supplier) => (StatusCode::OK, Json(supplier)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "supplier not found"),
    }
}

async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<Pagination>,
) -> axum::response::Response {
    let mut suppliers = services.suppliers.list();
    suppliers.sort_by(|a, b| a.name.cmp(&b.name));
    let items = page.apply(suppliers);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
