//! Supplier ledger: running due/paid balances updated by payment events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::{DomainError, DomainResult, PaymentId, PaymentMethod, SupplierId};

/// Supplier status; toggled with no other side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

/// One settled payment toward a supplier's dues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
}

/// A supplier with its money ledger.
///
/// # Invariants
/// - `total_due` never goes negative; payments clamp it at zero.
/// - `total_paid` is monotonically non-decreasing.
/// - `payments` is ordered newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub company_name: String,
    pub phone: String,
    pub location: String,
    pub total_due: i64,
    pub total_paid: i64,
    pub status: SupplierStatus,
    pub payments: Vec<PaymentRecord>,
}

impl Supplier {
    /// Register a new supplier with a clean ledger.
    pub fn register(
        name: impl Into<String>,
        company_name: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let phone = phone.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name must not be blank"));
        }
        if phone.trim().is_empty() {
            return Err(DomainError::validation("supplier phone must not be blank"));
        }

        Ok(Self {
            id: SupplierId::new(),
            name,
            company_name: company_name.into(),
            phone,
            location: location.into(),
            total_due: 0,
            total_paid: 0,
            status: SupplierStatus::Active,
            payments: Vec::new(),
        })
    }

    /// Apply a payment event: due shrinks (clamped at zero), paid grows, and
    /// the payment is prepended to the history.
    pub fn record_payment(
        &mut self,
        amount: i64,
        date: NaiveDate,
        method: PaymentMethod,
    ) -> DomainResult<&PaymentRecord> {
        if amount <= 0 {
            return Err(DomainError::validation("payment amount must be positive"));
        }

        self.total_due = (self.total_due - amount).max(0);
        self.total_paid += amount;
        self.payments.insert(
            0,
            PaymentRecord {
                id: PaymentId::new(),
                amount,
                date,
                method,
            },
        );

        Ok(&self.payments[0])
    }

    /// Flip active/inactive.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            SupplierStatus::Active => SupplierStatus::Inactive,
            SupplierStatus::Inactive => SupplierStatus::Active,
        };
    }
}
