//! Customer and supplier ledgers.

pub mod customer;
pub mod supplier;

pub use customer::Customer;
pub use supplier::{PaymentRecord, Supplier, SupplierStatus};
