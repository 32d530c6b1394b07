use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use nexus_infra::AppServices;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/", post(record_cost).get(list_costs))
}

async fn record_cost(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::RecordCostRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "costs.record") {
        return resp;
    }
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
    match services
        .costs
        .record(date, &body.category, body.amount, &body.note)
    {
        Ok(cost) => (StatusCode::CREATED, Json(cost)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[derive(Debug, Default, Deserialize)]
struct CostFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    category: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_costs(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(filter): Query<CostFilter>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "costs.record") {
        return resp;
    }
    let mut costs =
        services
            .costs
            .list_filtered(filter.from, filter.to, filter.category.as_deref());
    costs.sort_by_key(|c| std::cmp::Reverse(c.date));
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(costs);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
