//! The immutable sale receipt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::{AccountId, DomainError, DomainResult, MobileProvider, PaymentMethod, ProductId, SaleId};

use crate::cart::Cart;
use crate::settlement::Settlement;

/// One line of a completed sale, frozen at completion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: ProductId,
    pub product_name: String,
    /// Unit price in smallest currency unit (cents).
    pub unit_price: i64,
    pub quantity: i64,
    /// `unit_price * quantity` (cents).
    pub total: i64,
}

/// Customer details as entered at the till.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    /// Dedup key for the customer ledger; must not be blank.
    pub phone: String,
}

/// Immutable receipt of one transaction. Append-only; completing a sale also
/// depletes product stock and upserts the customer ledger, as one atomic
/// unit handled by the sales service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub date: NaiveDate,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<SaleItem>,
    pub sub_total: i64,
    pub discount: i64,
    pub vat_percent: i64,
    pub vat_amount: i64,
    pub bag_count: i64,
    pub grand_total: i64,
    pub payment_method: PaymentMethod,
    pub provider: Option<MobileProvider>,
    /// The seller, when known ("my sales" view).
    pub employee_id: Option<AccountId>,
}

impl SaleRecord {
    /// Build the receipt for a completed sale.
    ///
    /// Rejects an empty cart, a blank customer phone, and a discount larger
    /// than `sub_total + vat_amount` (which would drive the total negative).
    /// A mobile banking sale must name its provider; any other payment
    /// method carries no provider on the receipt. A rejection here happens
    /// before any ledger is touched.
    pub fn build(
        cart: &Cart,
        customer: CustomerInfo,
        settlement: Settlement,
        payment_method: PaymentMethod,
        provider: Option<MobileProvider>,
        employee_id: Option<AccountId>,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }
        if customer.phone.trim().is_empty() {
            return Err(DomainError::validation("customer phone must not be blank"));
        }
        if settlement.discount < 0 {
            return Err(DomainError::validation("discount must not be negative"));
        }
        if settlement.grand_total < 0 {
            return Err(DomainError::validation(
                "discount exceeds sub total plus VAT",
            ));
        }
        let provider = match payment_method {
            PaymentMethod::MobileBanking => match provider {
                Some(provider) => Some(provider),
                None => {
                    return Err(DomainError::validation(
                        "mobile banking sales require a provider",
                    ));
                }
            },
            _ => None,
        };

        let items = cart
            .lines()
            .iter()
            .map(|line| SaleItem {
                product_id: line.product_id,
                product_name: line.product_name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                total: line.line_total(),
            })
            .collect();

        Ok(Self {
            id: SaleId::new(),
            date,
            customer_name: customer.name,
            customer_phone: customer.phone,
            items,
            sub_total: settlement.sub_total,
            discount: settlement.discount,
            vat_percent: settlement.vat_percent,
            vat_amount: settlement.vat_amount,
            bag_count: settlement.bag_count,
            grand_total: settlement.grand_total,
            payment_method,
            provider,
            employee_id,
        })
    }
}
