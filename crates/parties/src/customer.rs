//! Customer ledger: one record per phone number, accumulated across visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::CustomerId;

/// A customer record, keyed by phone for deduplication.
///
/// # Invariant
/// Two sales with the same phone never produce two records; the name stored
/// at first visit is kept even if later sales spell it differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    /// Running sum of grand totals (cents).
    pub total_spent: i64,
    /// Outstanding credit (cents); unused by the till flow, starts at 0.
    pub due_amount: i64,
    pub last_visit: NaiveDate,
}

impl Customer {
    /// Create the record for a first-time phone number.
    pub fn first_visit(
        name: impl Into<String>,
        phone: impl Into<String>,
        sale_total: i64,
        sale_date: NaiveDate,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            phone: phone.into(),
            total_spent: sale_total,
            due_amount: 0,
            last_visit: sale_date,
        }
    }

    /// Record a repeat visit: spend accumulates and the visit date moves
    /// forward. The stored name is not overwritten.
    pub fn record_visit(&mut self, sale_total: i64, sale_date: NaiveDate) {
        self.total_spent += sale_total;
        self.last_visit = sale_date;
    }
}
