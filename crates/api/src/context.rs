use nexus_auth::Role;
use nexus_core::AccountId;

/// Authenticated identity for a request, resolved from the bearer session.
///
/// This is immutable and must be present for all protected routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    account_id: AccountId,
    role: Role,
    level: u8,
}

impl SessionContext {
    pub fn new(account_id: AccountId, role: Role, level: u8) -> Self {
        Self {
            account_id,
            role,
            level,
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}
