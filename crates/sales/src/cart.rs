//! The cashier's cart: per-product lines with a stock reservation check.

use serde::{Deserialize, Serialize};

use nexus_core::{DomainError, DomainResult, ProductId};
use nexus_products::Product;

/// One cart line: product, unit price captured at add time, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    /// Unit price in smallest currency unit (cents).
    pub unit_price: i64,
    pub quantity: i64,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity
    }
}

/// An in-progress sale. Adding a product fails if the requested quantity
/// would exceed what the catalog has on hand, counting what the cart has
/// already reserved for that product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from already-validated lines (e.g. a replayed request).
    /// Stock checks happen only in [`Cart::add`]; callers that bypass it are
    /// expected to re-check availability at completion time.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity already reserved in this cart for a product.
    pub fn reserved(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .sum()
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    pub fn add(&mut self, product: &Product, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let available = product.stock - self.reserved(product.id);
        if quantity > available {
            return Err(DomainError::InsufficientStock {
                requested: quantity,
                available: available.max(0),
            });
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product_id: product.id,
                product_name: product.name.clone(),
                unit_price: product.price,
                quantity,
            }),
        }

        Ok(())
    }

    /// Sum of line totals.
    pub fn sub_total(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, price: i64) -> Product {
        Product {
            id: ProductId::new(),
            name: "Organic Milk".to_string(),
            sku: "OM-1001".to_string(),
            barcode: "111222333444".to_string(),
            category: "Dairy".to_string(),
            sub_category: None,
            brand: "BioFarm".to_string(),
            sub_brand: None,
            stock,
            price,
            cost: 2_10,
            unit: "pcs".to_string(),
            supplier: "BioFarm Foods".to_string(),
            tax_percent: 0,
        }
    }

    #[test]
    fn add_merges_lines_for_same_product() {
        let milk = product(10, 4_50);
        let mut cart = Cart::new();
        cart.add(&milk, 2).unwrap();
        cart.add(&milk, 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.sub_total(), 5 * 4_50);
    }

    #[test]
    fn add_rejects_when_reservation_exceeds_stock() {
        let milk = product(5, 4_50);
        let mut cart = Cart::new();
        cart.add(&milk, 4).unwrap();

        let err = cart.add(&milk, 2).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 2,
                available: 1
            }
        );
        // The failed add left the cart unchanged.
        assert_eq!(cart.reserved(milk.id), 4);
    }

    #[test]
    fn add_rejects_non_positive_quantity() {
        let milk = product(5, 4_50);
        let mut cart = Cart::new();
        assert!(cart.add(&milk, 0).is_err());
        assert!(cart.add(&milk, -1).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn out_of_stock_product_cannot_be_added() {
        let milk = product(0, 4_50);
        let mut cart = Cart::new();
        let err = cart.add(&milk, 1).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 1,
                available: 0
            }
        );
    }
}
