use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;

use nexus_core::LeaveRequestId;
use nexus_hr::LeaveStatus;
use nexus_infra::AppServices;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(submit_request).get(list_requests))
        .route("/:id/approve", post(approve_request))
        .route("/:id/deny", post(deny_request))
}

/// Submit a request on behalf of the logged-in employee.
async fn submit_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::SubmitLeaveRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "leave.submit") {
        return resp;
    }
    match services.leave.submit(
        session.account_id(),
        body.leave_type,
        &body.reason,
        body.start_date,
        body.end_date,
        Utc::now().date_naive(),
    ) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn approve_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ApproveLeaveRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "leave.decide") {
        return resp;
    }
    let id: LeaveRequestId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services
        .leave
        .approve(id, session.account_id(), body.paid_status)
    {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn deny_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "leave.decide") {
        return resp;
    }
    let id: LeaveRequestId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.leave.deny(id, session.account_id()) {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[derive(Debug, Default, Deserialize)]
struct LeaveFilter {
    status: Option<LeaveStatus>,
    limit: Option<usize>,
    offset: Option<usize>,
}

/// Employees see their own requests; deciders see everyone's.
async fn list_requests(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(filter): Query<LeaveFilter>,
) -> axum::response::Response {
    let mut requests = services.leave.list();
    if common::require(&session, "leave.decide").is_err() {
        requests.retain(|r| r.employee_id == session.account_id());
    }
    requests.sort_by_key(|r| std::cmp::Reverse(r.request_date));
    if let Some(status) = filter.status {
        requests.retain(|r| r.status == status);
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(requests);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
