use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use nexus_auth::{AuthError, AuthzError};
use nexus_core::DomainError;
use nexus_infra::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::Auth(e) => auth_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::InsufficientStock {
            requested,
            available,
        } => json_error(
            StatusCode::CONFLICT,
            "insufficient_stock",
            format!("requested {requested}, available {available}"),
        ),
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidCredentials => {
            json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", err.to_string())
        }
        AuthError::AccountPending => {
            json_error(StatusCode::FORBIDDEN, "account_pending", err.to_string())
        }
        AuthError::AccountRejected => {
            json_error(StatusCode::FORBIDDEN, "account_rejected", err.to_string())
        }
        AuthError::DuplicateEmail => {
            json_error(StatusCode::CONFLICT, "duplicate_email", err.to_string())
        }
    }
}

pub fn authz_error_to_response(err: AuthzError) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
