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
use nexus_purchasing::PurchaseIntake;

use crate::app::routes::common::{self, Pagination};
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/", post(record_purchase).get(list_purchases))
}

async fn record_purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::RecordPurchaseRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require(&session, "purchases.record") {
        return resp;
    }

    let intake = PurchaseIntake {
        supplier: body.supplier,
        product_name: body.product_name,
        category: body.category,
        sub_category: body.sub_category,
        brand: body.brand,
        sub_brand: body.sub_brand,
        unit: body.unit,
        quantity: body.quantity,
        unit_cost: body.unit_cost,
        sale_price: body.sale_price,
        tax_percent: body.tax_percent,
    };
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    match services.purchasing.record_intake(intake, date) {
        Ok((record, product)) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "purchase": record,
                "product": product,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[derive(Debug, Default, Deserialize)]
struct PurchaseFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_purchases(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<PurchaseFilter>,
) -> axum::response::Response {
    let mut purchases = services.purchasing.list_purchases();
    purchases.sort_by_key(|p| std::cmp::Reverse(p.date));
    if let Some(from) = filter.from {
        purchases.retain(|p| p.date >= from);
    }
    if let Some(to) = filter.to {
        purchases.retain(|p| p.date <= to);
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(purchases);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
