//! Account model: identity, status gating, and the login/registration rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nexus_core::{AccountId, DomainError, DomainResult};

/// Role granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Manager,
    Employee,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "SUPER_ADMIN"),
            Role::Manager => write!(f, "MANAGER"),
            Role::Employee => write!(f, "EMPLOYEE"),
        }
    }
}

/// Account lifecycle status. New registrations start `Pending` and are gated
/// from logging in until an approver transitions them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
}

/// A named extra allowance within a salary structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAllowance {
    pub name: String,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
}

/// The stored salary breakdown for an employee. Payroll copies these values
/// at run time (snapshot semantics); later edits never change past runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SalaryStructure {
    pub basic: i64,
    pub house_rent: i64,
    pub medical: i64,
    pub internet_bill: i64,
    pub extras: Vec<NamedAllowance>,
}

impl SalaryStructure {
    /// Sum of all allowances (basic + house rent + medical + internet + extras).
    pub fn total_allowances(&self) -> i64 {
        self.basic
            + self.house_rent
            + self.medical
            + self.internet_bill
            + self.extras.iter().map(|a| a.amount).sum::<i64>()
    }
}

/// Login/registration-specific failures. These are user-facing and
/// recoverable; the directory stays untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account is awaiting approval")]
    AccountPending,

    #[error("account has been rejected")]
    AccountRejected,

    #[error("an account with this email already exists")]
    DuplicateEmail,
}

/// A user account in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    /// Stored credential; skipped on serialization so it never leaves the
    /// process.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: Role,
    pub status: AccountStatus,
    /// Access level 1-4; new registrations start at 1.
    pub level: u8,
    pub join_date: NaiveDate,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary_structure: Option<SalaryStructure>,
}

impl Account {
    /// Create a freshly registered account: `Pending`, level 1, no salary
    /// structure yet. Blank fields are rejected.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        join_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        let password = password.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email must be a valid address"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be blank"));
        }

        Ok(Self {
            id: AccountId::new(),
            name,
            email,
            password,
            role,
            status: AccountStatus::Pending,
            level: 1,
            join_date,
            department: None,
            position: None,
            salary_structure: None,
        })
    }

    /// Normalized lookup key for duplicate-email checks (case-insensitive).
    pub fn email_key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Check a login attempt against this account.
    ///
    /// Credential mismatch is reported before status, so a probe cannot
    /// distinguish a pending account without the right password.
    pub fn verify_login(&self, password: &str) -> Result<(), AuthError> {
        if self.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        match self.status {
            AccountStatus::Pending => Err(AuthError::AccountPending),
            AccountStatus::Rejected => Err(AuthError::AccountRejected),
            AccountStatus::Approved => Ok(()),
        }
    }

    /// Transition `Pending` -> `Approved`. Any other starting status is a
    /// conflict.
    pub fn approve(&mut self) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = AccountStatus::Approved;
        Ok(())
    }

    /// Transition `Pending` -> `Rejected`.
    pub fn reject(&mut self) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = AccountStatus::Rejected;
        Ok(())
    }

    fn ensure_pending(&self) -> DomainResult<()> {
        if self.status != AccountStatus::Pending {
            return Err(DomainError::conflict(format!(
                "account is not pending (status: {:?})",
                self.status
            )));
        }
        Ok(())
    }
}
