use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use nexus_core::SessionId;
use nexus_infra::AppServices;

use crate::app::{dto, errors};

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services
        .identity
        .login(&body.email, &body.password, body.role)
    {
        Ok((account, token)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "token": token.to_string(),
                "account": account,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    match services.identity.register(
        &body.name,
        &body.email,
        &body.password,
        body.role,
        Utc::now().date_naive(),
    ) {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(token): Extension<SessionId>,
) -> axum::response::Response {
    services.identity.logout(token);
    StatusCode::NO_CONTENT.into_response()
}
