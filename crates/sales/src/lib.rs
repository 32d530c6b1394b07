//! Cart building, settlement math, and sale receipts.

pub mod cart;
pub mod record;
pub mod settlement;

pub use cart::{Cart, CartLine};
pub use record::{CustomerInfo, SaleItem, SaleRecord};
pub use settlement::{DEFAULT_VAT_PERCENT, Settlement, compute_settlement};
