//! Operational expense entries (company costs).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::{CostId, DomainError, DomainResult};

/// Immutable operational expense entry. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRecord {
    pub id: CostId,
    pub date: NaiveDate,
    pub category: String,
    /// Amount in smallest currency unit (cents).
    pub amount: i64,
    pub note: String,
}

impl CostRecord {
    /// Record one expense. Rejects a blank category and non-positive amount.
    pub fn record(
        date: NaiveDate,
        category: impl Into<String>,
        amount: i64,
        note: impl Into<String>,
    ) -> DomainResult<Self> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(DomainError::validation("cost category must not be blank"));
        }
        if amount <= 0 {
            return Err(DomainError::validation("cost amount must be positive"));
        }

        Ok(Self {
            id: CostId::new(),
            date,
            category,
            amount,
            note: note.into(),
        })
    }
}
