//! Catalog product with on-hand stock.
//!
//! Products are created by the first purchase of a new name and mutated by
//! every later purchase (stock in) and sale (stock out). SKU and barcode are
//! assigned once at creation and stable thereafter.

use serde::{Deserialize, Serialize};

use nexus_core::ProductId;

/// A sellable catalog entry.
///
/// # Invariants
/// - `stock` is never negative; depletion clamps at zero.
/// - `sku` and `barcode` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub barcode: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub brand: String,
    pub sub_brand: Option<String>,
    /// On-hand quantity.
    pub stock: i64,
    /// Sale price in smallest currency unit (cents).
    pub price: i64,
    /// Unit cost in smallest currency unit (cents).
    pub cost: i64,
    /// Unit label, e.g. "kg" or "pcs".
    pub unit: String,
    /// Supplier display name as entered on the purchase.
    pub supplier: String,
    /// Tax percentage applied at sale time.
    pub tax_percent: i64,
}

impl Product {
    /// Threshold below which a product shows up in the low-stock report.
    pub const LOW_STOCK_THRESHOLD: i64 = 10;

    /// Remove up to `quantity` units, clamping at zero. Returns the number
    /// of units actually removed.
    pub fn deplete(&mut self, quantity: i64) -> i64 {
        let taken = quantity.min(self.stock).max(0);
        self.stock -= taken;
        taken
    }

    /// Apply a repeat purchase of this product: stock accumulates, and the
    /// purchase's prices overwrite the stored ones. Costing is
    /// last-write-wins, not a weighted average.
    pub fn receive(&mut self, quantity: i64, unit_cost: i64, sale_price: i64) {
        self.stock += quantity;
        self.cost = unit_cost;
        self.price = sale_price;
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < Self::LOW_STOCK_THRESHOLD
    }

    /// Case-insensitive name key used to decide create-vs-update on intake.
    pub fn name_key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
