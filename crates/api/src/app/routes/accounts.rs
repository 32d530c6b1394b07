use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::Deserialize;

use nexus_auth::{AccountStatus, SalaryStructure};
use nexus_core::AccountId;
use nexus_infra::AppServices;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_accounts))
        .route("/:id/approve", post(approve_account))
        .route("/:id/reject", post(reject_account))
        .route("/:id/salary-structure", put(set_salary_structure))
}

#[derive(Debug, Default, Deserialize)]
struct AccountFilter {
    status: Option<AccountStatus>,
    limit: Option<usize>,
    offset: Option<usize>,
}

/// Pending accounts first, for the approval queue.
async fn list_accounts(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(filter): Query<AccountFilter>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "accounts.approve") {
        return resp;
    }

    let mut accounts = services.identity.list_accounts();
    accounts.sort_by_key(|a| (a.status != AccountStatus::Pending, a.join_date));
    if let Some(status) = filter.status {
        accounts.retain(|a| a.status == status);
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(accounts);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

async fn approve_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "accounts.approve") {
        return resp;
    }
    let id: AccountId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.identity.approve(id) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn reject_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "accounts.approve") {
        return resp;
    }
    let id: AccountId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.identity.reject(id) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn set_salary_structure(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::SalaryStructureRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "payroll.run") {
        return resp;
    }
    let id: AccountId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let structure = SalaryStructure {
        basic: body.basic,
        house_rent: body.house_rent,
        medical: body.medical,
        internet_bill: body.internet_bill,
        extras: body
            .extras
            .into_iter()
            .map(|e| nexus_auth::NamedAllowance {
                name: e.name,
                amount: e.amount,
            })
            .collect(),
    };

    match services.payroll.set_salary_structure(id, structure) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
