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

use nexus_core::{AccountId, ProductId};
use nexus_infra::{AppServices, CartRequestLine};
use nexus_sales::CustomerInfo;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/", post(complete_sale).get(list_sales))
}

async fn complete_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::CompleteSaleRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "sales.record") {
        return resp;
    }

    let mut lines = Vec::with_capacity(body.items.len());
    for item in &body.items {
        let product_id: ProductId = match common::parse_id(&item.product_id) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        lines.push(CartRequestLine {
            product_id,
            quantity: item.quantity,
        });
    }

    let cart = match services.sales.build_cart(&lines) {
        Ok(cart) => cart,
        Err(e) => return errors::service_error_to_response(e),
    };
    let settlement = services
        .sales
        .settle(&cart, body.discount, body.vat_percent, body.bag_count);
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    match services.sales.complete_sale(
        &cart,
        CustomerInfo {
            name: body.customer_name,
            phone: body.customer_phone,
        },
        settlement,
        body.payment_method,
        body.provider,
        Some(session.account_id()),
        date,
    ) {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[derive(Debug, Default, Deserialize)]
struct SaleFilter {
    /// Restrict to one seller ("my sales").
    employee_id: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_sales(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<SaleFilter>,
) -> axum::response::Response {
    let employee_id = match filter.employee_id.as_deref() {
        Some(raw) => match common::parse_id::<AccountId>(raw) {
            Ok(v) => Some(v),
            Err(resp) => return resp,
        },
        None => None,
    };

    let mut sales = services.sales.list_sales();
    sales.sort_by_key(|s| std::cmp::Reverse(s.date));
    if let Some(employee_id) = employee_id {
        sales.retain(|s| s.employee_id == Some(employee_id));
    }
    if let Some(from) = filter.from {
        sales.retain(|s| s.date >= from);
    }
    if let Some(to) = filter.to {
        sales.retain(|s| s.date <= to);
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(sales);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
