//! Purchase intake: create-or-update the catalog entry, append the receipt.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_core::{ProductId, PurchaseId};
use nexus_products::{Product, generate_barcode, generate_sku};
use nexus_purchasing::{PurchaseIntake, PurchaseRecord};

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type ProductStore = Arc<dyn EntityStore<ProductId, Product>>;
pub type PurchaseStore = Arc<dyn EntityStore<PurchaseId, PurchaseRecord>>;

/// Records supplier stock intake against the product ledger.
pub struct PurchasingService {
    products: ProductStore,
    purchases: PurchaseStore,
}

impl PurchasingService {
    pub fn new(products: ProductStore, purchases: PurchaseStore) -> Self {
        Self { products, purchases }
    }

    /// Apply one intake.
    ///
    /// If a product with the same name (case-insensitive) exists, its stock
    /// accumulates and its price/cost are overwritten (last-write-wins).
    /// Otherwise a new product is created with generated SKU and barcode.
    /// Either way an immutable `PurchaseRecord` is appended. A rejected
    /// intake leaves both ledgers untouched.
    pub fn record_intake(
        &self,
        intake: PurchaseIntake,
        date: NaiveDate,
    ) -> ServiceResult<(PurchaseRecord, Product)> {
        intake.validate()?;

        let key = Product::name_key(&intake.product_name);
        let existing = self
            .products
            .list()
            .into_iter()
            .find(|p| Product::name_key(&p.name) == key);

        let product = match existing {
            Some(found) => {
                self.products.update(&found.id, &mut |p| {
                    p.receive(intake.quantity, intake.unit_cost, intake.sale_price);
                    p.supplier = intake.supplier.clone();
                    p.tax_percent = intake.tax_percent;
                    Ok(())
                })?;
                self.products
                    .get(&found.id)
                    .ok_or(nexus_core::DomainError::NotFound)?
            }
            None => {
                let mut rng = rand::thread_rng();
                let product = Product {
                    id: ProductId::new(),
                    name: intake.product_name.clone(),
                    sku: generate_sku(&intake.product_name, &mut rng),
                    barcode: generate_barcode(&mut rng),
                    category: intake.category.clone(),
                    sub_category: intake.sub_category.clone(),
                    brand: intake.brand.clone(),
                    sub_brand: intake.sub_brand.clone(),
                    stock: intake.quantity,
                    price: intake.sale_price,
                    cost: intake.unit_cost,
                    unit: intake.unit.clone(),
                    supplier: intake.supplier.clone(),
                    tax_percent: intake.tax_percent,
                };
                self.products.upsert(product.id, product.clone());
                tracing::info!(product_id = %product.id, sku = %product.sku, "product created by intake");
                product
            }
        };

        let record = PurchaseRecord {
            id: PurchaseId::new(),
            date,
            supplier: intake.supplier,
            product_id: product.id,
            product_name: product.name.clone(),
            brand: intake.brand,
            quantity: intake.quantity,
            unit_cost: intake.unit_cost,
            sale_price: intake.sale_price,
            product_code: product.sku.clone(),
            barcode: product.barcode.clone(),
        };
        self.purchases.upsert(record.id, record.clone());

        tracing::info!(
            purchase_id = %record.id,
            product_id = %product.id,
            quantity = record.quantity,
            "intake recorded"
        );
        Ok((record, product))
    }

    pub fn list_purchases(&self) -> Vec<PurchaseRecord> {
        self.purchases.list()
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products.list()
    }

    pub fn get_product(&self, product_id: ProductId) -> Option<Product> {
        self.products.get(&product_id)
    }
}
