//! Product catalog
//!
//! This module provides the `Catalog` struct which owns every product the
//! store has ever listed.
//!
//! The Catalog is responsible for:
//! - Assigning sequential product identifiers (never reused)
//! - Validating new products (positive price, non-negative stock, a stock
//!   value that fits the money range)
//! - Hiding deactivated products from every read
//! - Applying partial field updates

use crate::types::{NewProduct, Product, ProductId, ProductUpdate, StoreError};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Owns the set of products
///
/// Products are keyed by identifier so listings come out in creation order.
/// Inactive products stay in the map for statistics and history but are
/// invisible to lookups.
#[derive(Debug)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            products: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Add a product to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The price is not strictly positive
    /// - The stock is negative
    /// - Price × stock overflows
    ///
    /// No identifier is consumed when validation fails.
    pub fn add(&mut self, input: NewProduct) -> Result<&Product, StoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(StoreError::required("name"));
        }
        if input.price <= Decimal::ZERO {
            return Err(StoreError::InvalidPrice { price: input.price });
        }
        if input.stock < 0 {
            return Err(StoreError::InvalidStock { stock: input.stock });
        }

        let id = self.last_id + 1;
        let product = Product {
            id,
            name: name.to_string(),
            description: input.description.trim().to_string(),
            price: input.price,
            category: input.category.trim().to_string(),
            stock: input.stock,
            active: true,
        };
        product.stock_value()?;

        self.last_id = id;
        info!(product = id, name = %product.name, price = %product.price, "product added");
        Ok(self.products.entry(id).or_insert(product))
    }

    /// Find an active product by identifier
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id).filter(|p| p.active)
    }

    /// Find an active product, failing with `ProductNotFound`
    pub fn require(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.find(id)
            .ok_or(StoreError::ProductNotFound { product: id })
    }

    /// Active products whose category matches, ignoring case
    pub fn find_by_category(&self, category: &str) -> Vec<&Product> {
        let wanted = category.trim().to_lowercase();
        self.active()
            .filter(|p| p.category.to_lowercase() == wanted)
            .collect()
    }

    /// All active products in identifier order
    pub fn list(&self) -> Vec<&Product> {
        self.active().collect()
    }

    /// Apply a partial update to an active product
    ///
    /// Blank and non-positive fields are skipped. The update fails for an
    /// unknown or inactive product, or when the new price × stock would
    /// overflow; the product is then left untouched.
    pub fn update(&mut self, id: ProductId, update: &ProductUpdate) -> Result<&Product, StoreError> {
        let product = self
            .products
            .get_mut(&id)
            .filter(|p| p.active)
            .ok_or(StoreError::ProductNotFound { product: id })?;

        let mut updated = product.clone();
        let changed = update.apply_to(&mut updated);
        updated.stock_value()?;

        *product = updated;
        debug!(product = id, changed, "product updated");
        Ok(product)
    }

    /// Permanently deactivate a product
    ///
    /// There is no way back: the product disappears from every catalog read
    /// but remains referenced by existing carts and orders.
    pub fn deactivate(&mut self, id: ProductId) -> Result<&Product, StoreError> {
        let product = self
            .products
            .get_mut(&id)
            .filter(|p| p.active)
            .ok_or(StoreError::ProductNotFound { product: id })?;

        product.active = false;
        info!(product = id, name = %product.name, "product deactivated");
        Ok(product)
    }

    /// Every product ever added, including deactivated ones
    pub fn all(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    fn active(&self) -> impl Iterator<Item = &Product> {
        self.products.values().filter(|p| p.active)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn new_product(name: &str, price: i64, category: &str, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price: Decimal::from(price),
            category: category.to_string(),
            stock,
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        let first = catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap().id;
        let second = catalog.add(new_product("Mouse", 20, "Electronics", 50)).unwrap().id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert!(catalog.find(1).unwrap().active);
    }

    #[rstest]
    #[case::blank_name(new_product("  ", 10, "Misc", 1), StoreError::required("name"))]
    #[case::zero_price(new_product("Pen", 0, "Misc", 1), StoreError::InvalidPrice { price: Decimal::ZERO })]
    #[case::negative_price(new_product("Pen", -3, "Misc", 1), StoreError::InvalidPrice { price: Decimal::from(-3) })]
    #[case::negative_stock(new_product("Pen", 3, "Misc", -1), StoreError::InvalidStock { stock: -1 })]
    #[case::stock_value_overflow(
        NewProduct { price: Decimal::MAX, ..new_product("Pen", 1, "Misc", 2) },
        StoreError::amount_overflow("Stock value")
    )]
    fn test_add_rejects_invalid_input(#[case] input: NewProduct, #[case] expected: StoreError) {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add(input).unwrap_err(), expected);

        // Failed adds do not consume an identifier
        let id = catalog.add(new_product("Pen", 3, "Misc", 0)).unwrap().id;
        assert_eq!(id, 1);
    }

    #[test]
    fn test_find_by_category_is_case_insensitive_and_active_only() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();
        catalog.add(new_product("Desk", 200, "Furniture", 2)).unwrap();
        catalog.add(new_product("Phone", 700, "ELECTRONICS", 3)).unwrap();
        catalog.deactivate(3).unwrap();

        let found: Vec<ProductId> = catalog
            .find_by_category("electronics")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_deactivated_product_is_hidden_but_counted() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();
        catalog.add(new_product("Mouse", 20, "Electronics", 50)).unwrap();
        catalog.deactivate(1).unwrap();

        assert!(catalog.find(1).is_none());
        assert_eq!(
            catalog.require(1).unwrap_err(),
            StoreError::ProductNotFound { product: 1 }
        );
        assert_eq!(catalog.list().len(), 1);
        assert_eq!(catalog.all().count(), 2);
    }

    #[test]
    fn test_deactivation_is_permanent() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();
        catalog.deactivate(1).unwrap();

        assert!(catalog.deactivate(1).is_err());
        assert!(catalog
            .update(1, &ProductUpdate { stock: Some(10), ..Default::default() })
            .is_err());
    }

    #[test]
    fn test_ids_are_not_reused_after_deactivation() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();
        catalog.deactivate(1).unwrap();

        let id = catalog.add(new_product("Tablet", 400, "Electronics", 1)).unwrap().id;
        assert_eq!(id, 2);
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();

        let product = catalog
            .update(
                1,
                &ProductUpdate {
                    price: Some(Decimal::from(900)),
                    stock: Some(0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(product.price, Decimal::from(900));
        assert_eq!(product.stock, 5);
        assert_eq!(product.name, "Laptop");
    }

    #[test]
    fn test_update_rejects_stock_value_overflow() {
        let mut catalog = Catalog::new();
        catalog.add(new_product("Laptop", 1000, "Electronics", 5)).unwrap();

        let err = catalog
            .update(
                1,
                &ProductUpdate {
                    name: Some("Gold laptop".to_string()),
                    price: Some(Decimal::MAX),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert_eq!(err, StoreError::amount_overflow("Stock value"));
        let product = catalog.find(1).unwrap();
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, Decimal::from(1000));
    }

    #[test]
    fn test_update_unknown_product() {
        let mut catalog = Catalog::new();
        let err = catalog.update(42, &ProductUpdate::default()).unwrap_err();
        assert_eq!(err, StoreError::ProductNotFound { product: 42 });
    }
}
