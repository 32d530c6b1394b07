use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use nexus_infra::AppServices;

use crate::app::routes::common::Pagination;

pub fn router() -> Router {
    Router::new().route("/", get(list_customers))
}

#[derive(Debug, Default, Deserialize)]
struct CustomerFilter {
    /// Free-text match against name or phone.
    q: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<CustomerFilter>,
) -> axum::response::Response {
    let mut customers = services.sales.list_customers();
    customers.sort_by_key(|c| std::cmp::Reverse(c.last_visit));
    if let Some(q) = &filter.q {
        let q = q.to_lowercase();
        customers.retain(|c| c.name.to_lowercase().contains(&q) || c.phone.contains(&q));
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(customers);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
