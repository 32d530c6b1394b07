//! Purchase intake: validated input and the immutable receipt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::{DomainError, DomainResult, ProductId, PurchaseId};

/// One requested stock intake, before it touches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseIntake {
    pub supplier: String,
    pub product_name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub brand: String,
    pub sub_brand: Option<String>,
    /// Unit label, e.g. "kg" or "pcs".
    pub unit: String,
    pub quantity: i64,
    /// Cost per unit in smallest currency unit (cents).
    pub unit_cost: i64,
    /// Sale price per unit in smallest currency unit (cents).
    pub sale_price: i64,
    pub tax_percent: i64,
}

impl PurchaseIntake {
    /// Validate the intake before any catalog mutation. A failed intake must
    /// leave the catalog and purchase ledger untouched.
    pub fn validate(&self) -> DomainResult<()> {
        if self.supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier must not be blank"));
        }
        if self.product_name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.unit_cost < 0 || self.sale_price < 0 {
            return Err(DomainError::validation("prices must not be negative"));
        }
        if self.tax_percent < 0 {
            return Err(DomainError::validation("tax percent must not be negative"));
        }
        Ok(())
    }
}

/// Immutable receipt of one intake event. Append-only: the purchase ledger
/// is never edited after the fact.
///
/// `product_code` and `barcode` are snapshots of the product's identifiers
/// at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    pub date: NaiveDate,
    pub supplier: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub brand: String,
    pub quantity: i64,
    /// Cost per unit in smallest currency unit (cents).
    pub unit_cost: i64,
    /// Sale price at time of purchase (cents).
    pub sale_price: i64,
    pub product_code: String,
    pub barcode: String,
}
