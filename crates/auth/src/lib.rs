//! Identity & access: accounts, status gating, and permissions.
//!
//! This crate is intentionally decoupled from HTTP and storage: account
//! lookup lives behind the directory service in `nexus-infra`, and the
//! rules here are pure.

pub mod account;
pub mod permissions;

pub use account::{
    Account, AccountStatus, AuthError, NamedAllowance, Role, SalaryStructure,
};
pub use permissions::{AuthzError, Permission, authorize, permissions_for};
