use serde::Deserialize;

use nexus_auth::Permission;

use crate::app::errors;
use crate::context::SessionContext;

const DEFAULT_LIMIT: usize = 50;

/// `limit`/`offset` query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl Pagination {
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

/// Check the caller's role for a required permission; `Err` carries the
/// ready-made 403 response.
pub fn require(
    session: &SessionContext,
    permission: &'static str,
) -> Result<(), axum::response::Response> {
    nexus_auth::authorize(session.role(), &Permission::new(permission))
        .map_err(errors::authz_error_to_response)
}

/// Parse a path id, mapping a bad value to a 400.
pub fn parse_id<T>(raw: &str) -> Result<T, axum::response::Response>
where
    T: core::str::FromStr,
{
    raw.parse::<T>().map_err(|_| {
        errors::json_error(
            axum::http::StatusCode::BAD_REQUEST,
            "invalid_id",
            "invalid id in path",
        )
    })
}
