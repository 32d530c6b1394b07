//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get, routing::post};
use chrono::Utc;

use nexus_auth::Role;
use nexus_infra::AppServices;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Bootstrap credentials for the pre-approved super admin account.
///
/// Everything else goes through register + approve, but the first approver
/// has to come from somewhere.
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AdminSeed {
    pub fn from_env() -> Self {
        let email = std::env::var("NEXUS_ADMIN_EMAIL").unwrap_or_else(|_| {
            tracing::warn!("NEXUS_ADMIN_EMAIL not set; using insecure dev default");
            "admin@nexusims.local".to_string()
        });
        let password = std::env::var("NEXUS_ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("NEXUS_ADMIN_PASSWORD not set; using insecure dev default");
            "admin".to_string()
        });
        Self {
            name: "Administrator".to_string(),
            email,
            password,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(admin: AdminSeed) -> Router {
    let services = Arc::new(AppServices::in_memory());

    let seeded = services
        .identity
        .register(
            &admin.name,
            &admin.email,
            &admin.password,
            Role::SuperAdmin,
            Utc::now().date_naive(),
        )
        .expect("seed admin account");
    services
        .identity
        .approve(seeded.id)
        .expect("approve seed admin account");

    let auth_state = middleware::AuthState {
        sessions: Arc::clone(&services.sessions),
    };

    // Protected routes: require a live session.
    let protected = routes::router()
        .layer(Extension(Arc::clone(&services)))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/register", post(routes::auth::register))
        .layer(Extension(services))
        .merge(protected)
}
