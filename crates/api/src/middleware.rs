use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use nexus_core::SessionId;
use nexus_infra::SessionStore;

use crate::context::SessionContext;

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<SessionStore>,
}

/// Resolve the opaque bearer token to a live session and stash the caller's
/// identity in request extensions.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_bearer(req.headers())?;

    let token: SessionId = token.parse().map_err(|_| StatusCode::UNAUTHORIZED)?;
    let session = state
        .sessions
        .resolve(token)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(token);
    req.extensions_mut().insert(SessionContext::new(
        session.account_id,
        session.role,
        session.level,
    ));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
