//! Permission model.
//!
//! Authorization is enforced at the service/API boundary, per operation,
//! rather than per screen: every mutating route names the permission it
//! needs and checks it against the caller's role before dispatch.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::Role;

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. "sales.record").
/// The special wildcard `"*"` means "allow all" and is granted to
/// super admins only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Permissions granted to each role.
///
/// Managers run the back office; employees operate the till and manage
/// their own leave; super admins can do everything, including account
/// approval.
pub fn permissions_for(role: Role) -> Vec<Permission> {
    match role {
        Role::SuperAdmin => vec![Permission::new("*")],
        Role::Manager => vec![
            Permission::new("purchases.record"),
            Permission::new("sales.record"),
            Permission::new("suppliers.manage"),
            Permission::new("payroll.run"),
            Permission::new("leave.submit"),
            Permission::new("leave.decide"),
            Permission::new("costs.record"),
        ],
        Role::Employee => vec![
            Permission::new("sales.record"),
            Permission::new("leave.submit"),
        ],
    }
}

/// Authorize a role for a required permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, required: &Permission) -> Result<(), AuthzError> {
    let granted = permissions_for(role);
    if granted
        .iter()
        .any(|p| p.is_wildcard() || p == required)
    {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}
