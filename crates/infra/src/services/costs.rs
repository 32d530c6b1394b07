//! Operational expense entries.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_accounting::CostRecord;
use nexus_core::CostId;

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type CostStore = Arc<dyn EntityStore<CostId, CostRecord>>;

pub struct CostService {
    costs: CostStore,
}

impl CostService {
    pub fn new(costs: CostStore) -> Self {
        Self { costs }
    }

    pub fn record(
        &self,
        date: NaiveDate,
        category: &str,
        amount: i64,
        note: &str,
    ) -> ServiceResult<CostRecord> {
        let cost = CostRecord::record(date, category, amount, note)?;
        self.costs.upsert(cost.id, cost.clone());
        tracing::info!(cost_id = %cost.id, category = %cost.category, amount, "cost recorded");
        Ok(cost)
    }

    pub fn list(&self) -> Vec<CostRecord> {
        self.costs.list()
    }

    /// List entries within an inclusive date range, optionally restricted to
    /// one category (case-insensitive).
    pub fn list_filtered(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        category: Option<&str>,
    ) -> Vec<CostRecord> {
        let category = category.map(str::to_lowercase);
        self.costs
            .list()
            .into_iter()
            .filter(|c| from.is_none_or(|d| c.date >= d))
            .filter(|c| to.is_none_or(|d| c.date <= d))
            .filter(|c| {
                category
                    .as_deref()
                    .is_none_or(|cat| c.category.to_lowercase() == cat)
            })
            .collect()
    }
}
