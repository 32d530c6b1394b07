//! Supplier stock intake records.

pub mod intake;

pub use intake::{PurchaseIntake, PurchaseRecord};
