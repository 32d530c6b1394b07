//! Settlement math: subtotal, VAT, discount, grand total.
//!
//! All amounts are integer cents, so the identities
//! `grand_total == sub_total + vat_amount - discount` and
//! `vat_amount == round(sub_total * vat_percent / 100)` hold exactly.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// VAT applied when the caller does not specify one.
pub const DEFAULT_VAT_PERCENT: i64 = 5;

/// The computed totals for a sale.
///
/// `grand_total` is a pure pass-through of `sub_total + vat - discount` and
/// may be negative for an oversized discount; sale completion rejects that
/// case before anything is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Sum of line totals (cents).
    pub sub_total: i64,
    /// Flat discount (cents).
    pub discount: i64,
    pub vat_percent: i64,
    /// Derived VAT (cents), rounded half-up.
    pub vat_amount: i64,
    pub bag_count: i64,
    /// `sub_total + vat_amount - discount` (cents).
    pub grand_total: i64,
}

/// Compute the settlement for a cart.
pub fn compute_settlement(cart: &Cart, discount: i64, vat_percent: i64, bag_count: i64) -> Settlement {
    let sub_total = cart.sub_total();
    let vat_amount = vat_of(sub_total, vat_percent);
    Settlement {
        sub_total,
        discount,
        vat_percent,
        vat_amount,
        bag_count,
        grand_total: sub_total + vat_amount - discount,
    }
}

/// `amount * percent / 100`, rounded half-up, in integer cents.
fn vat_of(amount: i64, percent: i64) -> i64 {
    (amount * percent + 50).div_euclid(100)
}
