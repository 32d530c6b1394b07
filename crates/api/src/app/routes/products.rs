use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use nexus_core::ProductId;
use nexus_infra::AppServices;

use crate::app::errors;
use crate::app::routes::common::{self, Pagination};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/low-stock", get(list_low_stock))
        .route("/:id", get(get_product))
}

#[derive(Debug, Default, Deserialize)]
struct ProductFilter {
    /// Free-text match against name, SKU, or barcode.
    q: Option<String>,
    category: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<ProductFilter>,
) -> axum::response::Response {
    let mut products = services.purchasing.list_products();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    if let Some(q) = &filter.q {
        let q = q.to_lowercase();
        products.retain(|p| {
            p.name.to_lowercase().contains(&q)
                || p.sku.to_lowercase().contains(&q)
                || p.barcode.contains(&q)
        });
    }
    if let Some(category) = &filter.category {
        let category = category.to_lowercase();
        products.retain(|p| p.category.to_lowercase() == category);
    }
    let page = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    };
    let items = page.apply(products);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

/// Products running low, for the replenishment badge.
async fn list_low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<Pagination>,
) -> axum::response::Response {
    let mut products = services.purchasing.list_products();
    products.retain(|p| p.is_low_stock());
    products.sort_by_key(|p| p.stock);
    let items = page.apply(products);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match common::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.purchasing.get_product(id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}
