//! Domain foundation: errors, ids, payment vocabulary.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).
//! Monetary amounts everywhere in the workspace are `i64` in the smallest
//! currency unit (cents); quantities are `i64`.

pub mod error;
pub mod id;
pub mod payment;

pub use error::{DomainError, DomainResult};
pub use id::{
    AccountId, CostId, CustomerId, LeaveRequestId, PaymentId, PayrollId, ProductId, PurchaseId,
    SaleId, SessionId, SupplierId,
};
pub use payment::{MobileProvider, PaymentMethod};
