//! Product catalog and inventory ledger.

pub mod codegen;
pub mod product;

pub use codegen::{generate_barcode, generate_sku};
pub use product::Product;
