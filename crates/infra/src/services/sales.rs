//! Sale completion: the receipt, the stock depletion, and the customer
//! upsert applied as one unit.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_core::{AccountId, CustomerId, DomainError, MobileProvider, PaymentMethod, ProductId, SaleId};
use nexus_parties::Customer;
use nexus_products::Product;
use nexus_sales::{Cart, CustomerInfo, SaleRecord, Settlement, compute_settlement};

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type ProductStore = Arc<dyn EntityStore<ProductId, Product>>;
pub type SaleStore = Arc<dyn EntityStore<SaleId, SaleRecord>>;
pub type CustomerStore = Arc<dyn EntityStore<CustomerId, Customer>>;

/// Requested line for building a cart server-side.
#[derive(Debug, Clone, Copy)]
pub struct CartRequestLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Runs the till: builds carts against live stock and completes sales.
pub struct SalesService {
    products: ProductStore,
    sales: SaleStore,
    customers: CustomerStore,
}

impl SalesService {
    pub fn new(products: ProductStore, sales: SaleStore, customers: CustomerStore) -> Self {
        Self {
            products,
            sales,
            customers,
        }
    }

    /// Build a cart from requested lines, enforcing per-product stock
    /// reservation (`InsufficientStock` when a line exceeds what's left).
    pub fn build_cart(&self, lines: &[CartRequestLine]) -> ServiceResult<Cart> {
        let mut cart = Cart::new();
        for line in lines {
            let product = self
                .products
                .get(&line.product_id)
                .ok_or(nexus_core::DomainError::NotFound)?;
            cart.add(&product, line.quantity)?;
        }
        Ok(cart)
    }

    /// Compute the settlement for a cart without completing anything.
    pub fn settle(&self, cart: &Cart, discount: i64, vat_percent: i64, bag_count: i64) -> Settlement {
        compute_settlement(cart, discount, vat_percent, bag_count)
    }

    /// Complete a sale.
    ///
    /// All validation happens before any write: an empty cart, blank phone,
    /// or oversized discount rejects the sale with every ledger unchanged.
    /// Stock is then depleted line by line, re-checking availability under
    /// the store's write lock; a line that no longer fits (stock moved since
    /// the cart was built) refuses the whole sale and restores any prior
    /// depletions. Only a fully depleted sale appends the receipt and
    /// upserts the customer ledger by phone.
    #[allow(clippy::too_many_arguments)]
    pub fn complete_sale(
        &self,
        cart: &Cart,
        customer: CustomerInfo,
        settlement: Settlement,
        payment_method: PaymentMethod,
        provider: Option<MobileProvider>,
        employee_id: Option<AccountId>,
        date: NaiveDate,
    ) -> ServiceResult<SaleRecord> {
        let sale = SaleRecord::build(
            cart,
            customer,
            settlement,
            payment_method,
            provider,
            employee_id,
            date,
        )?;

        let mut depleted: Vec<(ProductId, i64)> = Vec::with_capacity(sale.items.len());
        for item in &sale.items {
            let result = self.products.update(&item.product_id, &mut |p| {
                // Stock may have moved since the cart was built; the check
                // must run under the same write lock as the depletion.
                if p.stock < item.quantity {
                    return Err(DomainError::InsufficientStock {
                        requested: item.quantity,
                        available: p.stock,
                    });
                }
                p.deplete(item.quantity);
                Ok(())
            });
            match result {
                Ok(()) => depleted.push((item.product_id, item.quantity)),
                Err(DomainError::NotFound) => {
                    // Unknown product id on a sold line: the sale stands, the
                    // depletion is skipped, and the warning is the paper trail.
                    tracing::warn!(
                        sale_id = %sale.id,
                        product_id = %item.product_id,
                        "sale line references unknown product; stock not depleted"
                    );
                }
                Err(err) => {
                    for (product_id, quantity) in depleted {
                        let _ = self.products.update(&product_id, &mut |p| {
                            p.stock += quantity;
                            Ok(())
                        });
                    }
                    return Err(err.into());
                }
            }
        }

        self.sales.upsert(sale.id, sale.clone());
        self.record_visit(&sale);

        tracing::info!(
            sale_id = %sale.id,
            grand_total = sale.grand_total,
            items = sale.items.len(),
            "sale completed"
        );
        Ok(sale)
    }

    /// Customer upsert keyed by phone: accumulate spend on a repeat phone,
    /// create the record on a first-seen phone.
    fn record_visit(&self, sale: &SaleRecord) {
        let existing = self
            .customers
            .list()
            .into_iter()
            .find(|c| c.phone == sale.customer_phone);

        match existing {
            Some(customer) => {
                let _ = self.customers.update(&customer.id, &mut |c| {
                    c.record_visit(sale.grand_total, sale.date);
                    Ok(())
                });
            }
            None => {
                let customer = Customer::first_visit(
                    sale.customer_name.clone(),
                    sale.customer_phone.clone(),
                    sale.grand_total,
                    sale.date,
                );
                self.customers.upsert(customer.id, customer);
            }
        }
    }

    pub fn list_sales(&self) -> Vec<SaleRecord> {
        self.sales.list()
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers.list()
    }
}
