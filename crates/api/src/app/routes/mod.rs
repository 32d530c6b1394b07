use axum::{Router, routing::get};

pub mod accounts;
pub mod auth;
pub mod common;
pub mod costs;
pub mod customers;
pub mod leaves;
pub mod payrolls;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod suppliers;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/auth/logout", axum::routing::post(auth::logout))
        .nest("/accounts", accounts::router())
        .nest("/products", products::router())
        .nest("/purchases", purchases::router())
        .nest("/sales", sales::router())
        .nest("/suppliers", suppliers::router())
        .nest("/customers", customers::router())
        .nest("/payroll-runs", payrolls::router())
        .nest("/leave-requests", leaves::router())
        .nest("/costs", costs::router())
}
