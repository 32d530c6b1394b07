//! Application services: one atomic operation per call, stores injected.

pub mod costs;
pub mod identity;
pub mod leave;
pub mod payroll;
pub mod purchasing;
pub mod sales;
pub mod suppliers;

pub use costs::CostService;
pub use identity::IdentityService;
pub use leave::LeaveService;
pub use payroll::PayrollService;
pub use purchasing::PurchasingService;
pub use sales::{CartRequestLine, SalesService};
pub use suppliers::SupplierService;

use std::sync::Arc;

use nexus_accounting::CostRecord;
use nexus_auth::Account;
use nexus_core::{
    AccountId, CostId, CustomerId, LeaveRequestId, PayrollId, ProductId, PurchaseId, SaleId,
    SupplierId,
};
use nexus_hr::{LeaveRequest, PayrollRecord};
use nexus_parties::{Customer, Supplier};
use nexus_products::Product;
use nexus_purchasing::PurchaseRecord;
use nexus_sales::SaleRecord;

use crate::session::SessionStore;
use crate::store::{EntityStore, InMemoryEntityStore};

/// The full service bundle wired over shared in-memory stores.
///
/// Services that touch the same ledger (purchasing and sales both mutate
/// products; payroll and leave both read accounts) share the same store
/// instance.
pub struct AppServices {
    pub identity: IdentityService,
    pub purchasing: PurchasingService,
    pub sales: SalesService,
    pub suppliers: SupplierService,
    pub payroll: PayrollService,
    pub leave: LeaveService,
    pub costs: CostService,
    pub sessions: Arc<SessionStore>,
}

impl AppServices {
    pub fn in_memory() -> Self {
        let accounts: Arc<dyn EntityStore<AccountId, Account>> =
            Arc::new(InMemoryEntityStore::new());
        let products: Arc<dyn EntityStore<ProductId, Product>> =
            Arc::new(InMemoryEntityStore::new());
        let purchases: Arc<dyn EntityStore<PurchaseId, PurchaseRecord>> =
            Arc::new(InMemoryEntityStore::new());
        let sales: Arc<dyn EntityStore<SaleId, SaleRecord>> = Arc::new(InMemoryEntityStore::new());
        let customers: Arc<dyn EntityStore<CustomerId, Customer>> =
            Arc::new(InMemoryEntityStore::new());
        let suppliers: Arc<dyn EntityStore<SupplierId, Supplier>> =
            Arc::new(InMemoryEntityStore::new());
        let payrolls: Arc<dyn EntityStore<PayrollId, PayrollRecord>> =
            Arc::new(InMemoryEntityStore::new());
        let leaves: Arc<dyn EntityStore<LeaveRequestId, LeaveRequest>> =
            Arc::new(InMemoryEntityStore::new());
        let costs: Arc<dyn EntityStore<CostId, CostRecord>> = Arc::new(InMemoryEntityStore::new());
        let sessions = Arc::new(SessionStore::new());

        Self {
            identity: IdentityService::new(Arc::clone(&accounts), Arc::clone(&sessions)),
            purchasing: PurchasingService::new(Arc::clone(&products), purchases),
            sales: SalesService::new(products, sales, customers),
            suppliers: SupplierService::new(suppliers),
            payroll: PayrollService::new(Arc::clone(&accounts), payrolls),
            leave: LeaveService::new(accounts, leaves),
            costs: CostService::new(costs),
            sessions,
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::in_memory()
    }
}
