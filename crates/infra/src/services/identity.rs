//! Identity & access service: the account directory plus sessions.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_auth::{Account, AuthError, Role};
use nexus_core::{AccountId, SessionId};

use crate::error::ServiceResult;
use crate::session::{Session, SessionStore};
use crate::store::EntityStore;

pub type AccountStore = Arc<dyn EntityStore<AccountId, Account>>;

/// Login, registration, and the pending/approved/rejected gate.
pub struct IdentityService {
    accounts: AccountStore,
    sessions: Arc<SessionStore>,
}

impl IdentityService {
    pub fn new(accounts: AccountStore, sessions: Arc<SessionStore>) -> Self {
        Self { accounts, sessions }
    }

    /// Look up an account by exact (email, role) match and verify the
    /// credential and status gate. On success the account is upserted back
    /// into the directory (idempotent refresh) and a session is issued.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> ServiceResult<(Account, SessionId)> {
        let key = Account::email_key(email);
        let account = self
            .accounts
            .list()
            .into_iter()
            .find(|a| Account::email_key(&a.email) == key && a.role == role)
            .ok_or(AuthError::InvalidCredentials)?;

        account.verify_login(password)?;

        self.accounts.upsert(account.id, account.clone());
        let token = self
            .sessions
            .issue(account.id, account.role, account.level);

        tracing::info!(account_id = %account.id, role = %account.role, "login");
        Ok((account, token))
    }

    /// Create a pending account. The duplicate-email check is
    /// case-insensitive and spans all roles.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        today: NaiveDate,
    ) -> ServiceResult<Account> {
        let key = Account::email_key(email);
        let duplicate = self
            .accounts
            .list()
            .iter()
            .any(|a| Account::email_key(&a.email) == key);
        if duplicate {
            return Err(AuthError::DuplicateEmail.into());
        }

        let account = Account::register(name, email, password, role, today)?;
        self.accounts.upsert(account.id, account.clone());

        tracing::info!(account_id = %account.id, role = %account.role, "account registered");
        Ok(account)
    }

    /// `Pending` -> `Approved`.
    pub fn approve(&self, account_id: AccountId) -> ServiceResult<Account> {
        self.accounts.update(&account_id, &mut |a| a.approve())?;
        Ok(self
            .accounts
            .get(&account_id)
            .ok_or(nexus_core::DomainError::NotFound)?)
    }

    /// `Pending` -> `Rejected`.
    pub fn reject(&self, account_id: AccountId) -> ServiceResult<Account> {
        self.accounts.update(&account_id, &mut |a| a.reject())?;
        Ok(self
            .accounts
            .get(&account_id)
            .ok_or(nexus_core::DomainError::NotFound)?)
    }

    pub fn resolve_session(&self, token: SessionId) -> Option<Session> {
        self.sessions.resolve(token)
    }

    pub fn logout(&self, token: SessionId) {
        self.sessions.revoke(token);
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        self.accounts.list()
    }

    pub fn get_account(&self, account_id: AccountId) -> Option<Account> {
        self.accounts.get(&account_id)
    }
}
