//! Product-related types for the store engine
//!
//! This module defines the catalog entry and the input shapes used to
//! create and edit it.

use super::{ProductId, StoreError};
use rust_decimal::Decimal;

/// A catalog entry
///
/// Products are never physically removed. Deactivation is permanent and
/// hides the product from every catalog read, while historical cart and
/// order snapshots keep referring to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Sequential identifier, starting at 1
    pub id: ProductId,

    pub name: String,

    pub description: String,

    /// Unit price, always strictly positive
    pub price: Decimal,

    /// Free-text category label, matched case-insensitively
    pub category: String,

    /// Units on hand, never negative
    ///
    /// Checked when items are added to a cart but never decremented.
    pub stock: i64,

    /// Whether the product is visible to lookups
    pub active: bool,
}

impl Product {
    /// Value of the units on hand (stock × price)
    ///
    /// Fails with `AmountOverflow` when the product does not fit the money
    /// range; the catalog never stores such a product.
    pub fn stock_value(&self) -> Result<Decimal, StoreError> {
        self.price
            .checked_mul(Decimal::from(self.stock))
            .ok_or_else(|| StoreError::amount_overflow("Stock value"))
    }
}

/// Input for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub stock: i64,
}

/// Partial update for a product
///
/// Each field is applied only when it carries a meaningful value: blank
/// strings and non-positive numbers are treated as "no change".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    /// Apply the non-empty fields to a product
    ///
    /// Returns the number of fields that were actually changed.
    pub fn apply_to(&self, product: &mut Product) -> usize {
        let mut changed = 0;

        if let Some(name) = non_blank(&self.name) {
            product.name = name;
            changed += 1;
        }
        if let Some(description) = non_blank(&self.description) {
            product.description = description;
            changed += 1;
        }
        if let Some(category) = non_blank(&self.category) {
            product.category = category;
            changed += 1;
        }
        if let Some(price) = self.price.filter(|p| *p > Decimal::ZERO) {
            product.price = price;
            changed += 1;
        }
        if let Some(stock) = self.stock.filter(|s| *s > 0) {
            product.stock = stock;
            changed += 1;
        }

        changed
    }
}

/// Trimmed copy of an optional string, or `None` when blank
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            description: "14 inch".to_string(),
            price: Decimal::new(100000, 2),
            category: "Electronics".to_string(),
            stock: 5,
            active: true,
        }
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(sample().stock_value().unwrap(), Decimal::new(500000, 2));
    }

    #[test]
    fn test_stock_value_overflow() {
        let product = Product {
            price: Decimal::MAX,
            stock: 2,
            ..sample()
        };
        assert_eq!(
            product.stock_value().unwrap_err(),
            StoreError::amount_overflow("Stock value")
        );
    }

    #[rstest]
    #[case::blank_name(ProductUpdate { name: Some("   ".to_string()), ..Default::default() })]
    #[case::zero_price(ProductUpdate { price: Some(Decimal::ZERO), ..Default::default() })]
    #[case::negative_price(ProductUpdate { price: Some(Decimal::new(-5, 0)), ..Default::default() })]
    #[case::zero_stock(ProductUpdate { stock: Some(0), ..Default::default() })]
    #[case::nothing(ProductUpdate::default())]
    fn test_update_skips_empty_values(#[case] update: ProductUpdate) {
        let mut product = sample();
        assert_eq!(update.apply_to(&mut product), 0);
        assert_eq!(product, sample());
    }

    #[test]
    fn test_update_applies_supplied_fields() {
        let mut product = sample();
        let update = ProductUpdate {
            name: Some(" Ultrabook ".to_string()),
            price: Some(Decimal::new(120000, 2)),
            stock: Some(9),
            ..Default::default()
        };

        assert_eq!(update.apply_to(&mut product), 3);
        assert_eq!(product.name, "Ultrabook");
        assert_eq!(product.price, Decimal::new(120000, 2));
        assert_eq!(product.stock, 9);
        assert_eq!(product.category, "Electronics");
    }
}
