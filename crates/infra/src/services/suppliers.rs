//! Supplier ledger bookkeeping, independent of the product catalog.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_core::{DomainError, PaymentMethod, SupplierId};
use nexus_parties::Supplier;

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type SupplierStore = Arc<dyn EntityStore<SupplierId, Supplier>>;

pub struct SupplierService {
    suppliers: SupplierStore,
}

impl SupplierService {
    pub fn new(suppliers: SupplierStore) -> Self {
        Self { suppliers }
    }

    pub fn register(
        &self,
        name: &str,
        company_name: &str,
        phone: &str,
        location: &str,
    ) -> ServiceResult<Supplier> {
        let supplier = Supplier::register(name, company_name, phone, location)?;
        self.suppliers.upsert(supplier.id, supplier.clone());
        tracing::info!(supplier_id = %supplier.id, name = %supplier.name, "supplier registered");
        Ok(supplier)
    }

    /// Apply one payment event to a supplier's ledger.
    pub fn record_payment(
        &self,
        supplier_id: SupplierId,
        amount: i64,
        date: NaiveDate,
        method: PaymentMethod,
    ) -> ServiceResult<Supplier> {
        self.suppliers.update(&supplier_id, &mut |s| {
            s.record_payment(amount, date, method)?;
            Ok(())
        })?;
        let supplier = self
            .suppliers
            .get(&supplier_id)
            .ok_or(DomainError::NotFound)?;
        tracing::info!(
            supplier_id = %supplier_id,
            amount,
            total_due = supplier.total_due,
            "supplier payment recorded"
        );
        Ok(supplier)
    }

    pub fn toggle_status(&self, supplier_id: SupplierId) -> ServiceResult<Supplier> {
        self.suppliers.update(&supplier_id, &mut |s| {
            s.toggle_status();
            Ok(())
        })?;
        Ok(self
            .suppliers
            .get(&supplier_id)
            .ok_or(DomainError::NotFound)?)
    }

    pub fn get(&self, supplier_id: SupplierId) -> Option<Supplier> {
        self.suppliers.get(&supplier_id)
    }

    pub fn list(&self) -> Vec<Supplier> {
        self.suppliers.list()
    }
}
