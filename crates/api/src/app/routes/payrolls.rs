use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;

use nexus_core::AccountId;
use nexus_hr::PayrollAdjustments;
use nexus_infra::AppServices;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/", post(run_payroll).get(list_payrolls))
}

async fn run_payroll(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::RunPayrollRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "payroll.run") {
        return resp;
    }
    let employee_id: AccountId = match common::parse_id(&body.employee_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let adjustments = PayrollAdjustments {
        vat_tax_deduction: body.vat_tax_deduction,
        bonus: body.bonus,
        overtime_pay: body.overtime_pay,
    };
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    match services.payroll.run(
        employee_id,
        &body.month,
        adjustments,
        body.status,
        body.method,
        date,
    ) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[derive(Debug, Default, Deserialize)]
struct PayrollFilter {
    employee_id: Option<String>,
    month: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_payrolls(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(filter): Query<PayrollFilter>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "payroll.run") {
        return resp;
    }
    let employee_id = match filter.employee_id.as_deref() {
        Some(raw) => match common::parse_id::<AccountId>(raw) {
            Ok(v) => Some(v),
            Err(resp) => return resp,
        },
        None => None,
    };

    let mut payrolls = services.payroll.list();
    payrolls.sort_by_key(|p| std::cmp::Reverse(p.date));
    if let Some(employee_id) = employee_id {
        payrolls.retain(|p| p.employee_id == employee_id);
    }
    if let Some(month) = &filter.month {
        payrolls.retain(|p| p.month.eq_ignore_ascii_case(month));
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(payrolls);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
