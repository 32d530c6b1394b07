//! Service-level error: domain rejections plus auth-specific kinds.

use thiserror::Error;

use nexus_auth::AuthError;
use nexus_core::DomainError;

/// Error returned by the application services.
///
/// Every variant is a local, recoverable, user-facing condition; the
/// operation was rejected and no ledger was touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
