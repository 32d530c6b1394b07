//! Infrastructure layer: entity storage, sessions, and application services.

pub mod error;
pub mod services;
pub mod session;
pub mod store;

mod integration_tests;

pub use error::{ServiceError, ServiceResult};
pub use services::{
    AppServices, CartRequestLine, CostService, IdentityService, LeaveService, PayrollService,
    PurchasingService, SalesService, SupplierService,
};
pub use session::{Session, SessionStore};
pub use store::{EntityStore, InMemoryEntityStore};
