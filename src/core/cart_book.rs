//! Shopping carts
//!
//! This module provides the `CartBook` struct which keeps at most one cart
//! per customer. Carts are created lazily on first access and are never
//! removed; checkout and explicit clearing only empty them.
//!
//! Adding an item checks the requested quantity against the catalog stock at
//! call time, but nothing is reserved or decremented.

use crate::types::{
    Cart, CartItem, CartTotals, CustomerId, Product, ProductId, StoreError,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Maximum discount percentage a cart may carry
pub const MAX_DISCOUNT_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Owns one cart per customer
///
/// Customer existence is checked by the caller; the book itself only
/// enforces cart-local rules.
#[derive(Debug, Default)]
pub struct CartBook {
    carts: BTreeMap<CustomerId, Cart>,
}

impl CartBook {
    pub fn new() -> Self {
        CartBook {
            carts: BTreeMap::new(),
        }
    }

    /// Get the customer's cart, creating an empty one on first access
    pub fn get_or_create(&mut self, customer: CustomerId) -> &mut Cart {
        self.carts
            .entry(customer)
            .or_insert_with(|| Cart::new(customer))
    }

    /// Get the customer's cart if one has been created
    pub fn get(&self, customer: CustomerId) -> Option<&Cart> {
        self.carts.get(&customer)
    }

    /// Add a quantity of an active product to the customer's cart
    ///
    /// The product's name and price are copied into the cart. When the
    /// product is already present, the quantities accumulate and the first
    /// snapshot is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The product is inactive
    /// - The quantity is not strictly positive
    /// - The quantity exceeds the product's current stock
    /// - The accumulated quantity or the cart total would overflow
    pub fn add_item(
        &mut self,
        customer: CustomerId,
        product: &Product,
        quantity: i64,
    ) -> Result<&Cart, StoreError> {
        if !product.active {
            return Err(StoreError::ProductNotFound {
                product: product.id,
            });
        }
        if quantity <= 0 {
            return Err(StoreError::InvalidQuantity { quantity });
        }
        if quantity > product.stock {
            return Err(StoreError::insufficient_stock(
                product.id,
                product.stock,
                quantity,
            ));
        }

        let cart = self.get_or_create(customer);
        cart.add(CartItem {
            product: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        })?;

        debug!(customer, product = product.id, quantity, "item added to cart");
        Ok(cart)
    }

    /// Remove a product line from the customer's cart
    pub fn remove_item(
        &mut self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<CartItem, StoreError> {
        let item = self
            .carts
            .get_mut(&customer)
            .and_then(|cart| cart.remove(product))
            .ok_or_else(|| StoreError::cart_item_not_found(customer, product))?;

        debug!(customer, product, "item removed from cart");
        Ok(item)
    }

    /// Set the cart's discount percentage
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage is outside [0, 50] or the cart is
    /// empty.
    pub fn apply_discount(
        &mut self,
        customer: CustomerId,
        percent: Decimal,
    ) -> Result<&Cart, StoreError> {
        if percent < Decimal::ZERO || percent > MAX_DISCOUNT_PERCENT {
            return Err(StoreError::DiscountOutOfRange {
                percent,
                max: MAX_DISCOUNT_PERCENT,
            });
        }

        let cart = self.non_empty_mut(customer)?;
        cart.discount = percent;
        debug!(customer, %percent, "discount applied");
        Ok(cart)
    }

    /// Empty the customer's cart and reset its discount
    ///
    /// Fails with `EmptyCart` when there is nothing to clear.
    pub fn clear(&mut self, customer: CustomerId) -> Result<(), StoreError> {
        self.non_empty_mut(customer)?.clear();
        debug!(customer, "cart cleared");
        Ok(())
    }

    /// Subtotal and discounted total of the customer's cart
    ///
    /// A customer without a cart has zero totals.
    pub fn totals(&self, customer: CustomerId) -> Result<CartTotals, StoreError> {
        match self.get(customer) {
            Some(cart) => cart.totals(),
            None => Cart::new(customer).totals(),
        }
    }

    /// Get the customer's cart, failing with `EmptyCart` if absent or empty
    pub fn require_non_empty(&self, customer: CustomerId) -> Result<&Cart, StoreError> {
        self.get(customer)
            .filter(|cart| !cart.is_empty())
            .ok_or(StoreError::EmptyCart { customer })
    }

    /// Number of carts currently holding at least one item
    pub fn non_empty_count(&self) -> usize {
        self.carts.values().filter(|cart| !cart.is_empty()).count()
    }

    /// Empty a cart after a successful checkout
    pub(crate) fn reset(&mut self, customer: CustomerId) {
        if let Some(cart) = self.carts.get_mut(&customer) {
            cart.clear();
        }
    }

    fn non_empty_mut(&mut self, customer: CustomerId) -> Result<&mut Cart, StoreError> {
        self.carts
            .get_mut(&customer)
            .filter(|cart| !cart.is_empty())
            .ok_or(StoreError::EmptyCart { customer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn laptop(stock: i64) -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            description: String::new(),
            price: Decimal::from(100),
            category: "Electronics".to_string(),
            stock,
            active: true,
        }
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut carts = CartBook::new();
        carts.get_or_create(1).discount = Decimal::from(5);
        assert_eq!(carts.get_or_create(1).discount, Decimal::from(5));
        assert_eq!(carts.non_empty_count(), 0);
    }

    #[test]
    fn test_quantities_accumulate_with_per_call_stock_check() {
        let mut carts = CartBook::new();
        let product = laptop(5);

        carts.add_item(1, &product, 3).unwrap();
        carts.add_item(1, &product, 4).unwrap();

        assert_eq!(carts.get(1).unwrap().items[&1].quantity, 7);
    }

    #[test]
    fn test_snapshot_survives_price_change() {
        let mut carts = CartBook::new();
        let mut product = laptop(5);
        carts.add_item(1, &product, 1).unwrap();

        product.price = Decimal::from(250);
        carts.add_item(1, &product, 1).unwrap();

        let item = &carts.get(1).unwrap().items[&1];
        assert_eq!(item.unit_price, Decimal::from(100));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_repeated_adds_cannot_overflow_quantity() {
        let mut carts = CartBook::new();
        let product = Product {
            price: Decimal::ONE,
            ..laptop(i64::MAX)
        };
        carts.add_item(1, &product, i64::MAX).unwrap();

        let err = carts.add_item(1, &product, i64::MAX).unwrap_err();
        assert_eq!(err, StoreError::amount_overflow("Cart quantity"));
        assert_eq!(carts.get(1).unwrap().items[&1].quantity, i64::MAX);
        assert_eq!(carts.totals(1).unwrap().subtotal, Decimal::from(i64::MAX));
    }

    #[rstest]
    #[case::zero(0, StoreError::InvalidQuantity { quantity: 0 })]
    #[case::negative(-2, StoreError::InvalidQuantity { quantity: -2 })]
    #[case::over_stock(6, StoreError::insufficient_stock(1, 5, 6))]
    fn test_add_item_rejections_leave_cart_unchanged(
        #[case] quantity: i64,
        #[case] expected: StoreError,
    ) {
        let mut carts = CartBook::new();
        let product = laptop(5);
        carts.add_item(1, &product, 2).unwrap();
        let before = carts.get(1).cloned();

        assert_eq!(carts.add_item(1, &product, quantity).unwrap_err(), expected);
        assert_eq!(carts.get(1).cloned(), before);
    }

    #[test]
    fn test_add_inactive_product_fails() {
        let mut carts = CartBook::new();
        let product = Product {
            active: false,
            ..laptop(5)
        };
        let err = carts.add_item(1, &product, 1).unwrap_err();
        assert_eq!(err, StoreError::ProductNotFound { product: 1 });
        assert!(carts.get(1).is_none());
    }

    #[test]
    fn test_remove_item() {
        let mut carts = CartBook::new();
        carts.add_item(1, &laptop(5), 2).unwrap();

        assert_eq!(carts.remove_item(1, 1).unwrap().quantity, 2);
        assert_eq!(
            carts.remove_item(1, 1).unwrap_err(),
            StoreError::cart_item_not_found(1, 1)
        );
    }

    #[rstest]
    #[case::zero(Decimal::ZERO, Decimal::from(300))]
    #[case::ten(Decimal::from(10), Decimal::from(270))]
    #[case::fractional(Decimal::new(125, 1), Decimal::new(2625, 1))]
    #[case::max(Decimal::from(50), Decimal::from(150))]
    fn test_discount_totals(#[case] percent: Decimal, #[case] expected: Decimal) {
        let mut carts = CartBook::new();
        carts.add_item(1, &laptop(5), 3).unwrap();
        carts.apply_discount(1, percent).unwrap();

        let totals = carts.totals(1).unwrap();
        assert_eq!(totals.subtotal, Decimal::from(300));
        assert_eq!(
            totals.discounted_total,
            totals.subtotal * (Decimal::ONE - percent / Decimal::ONE_HUNDRED)
        );
        assert_eq!(totals.discounted_total, expected);
    }

    #[rstest]
    #[case::negative(Decimal::from(-1))]
    #[case::above_max(Decimal::new(501, 1))]
    fn test_discount_out_of_range(#[case] percent: Decimal) {
        let mut carts = CartBook::new();
        carts.add_item(1, &laptop(5), 1).unwrap();

        let err = carts.apply_discount(1, percent).unwrap_err();
        assert!(matches!(err, StoreError::DiscountOutOfRange { .. }));
        assert_eq!(carts.get(1).unwrap().discount, Decimal::ZERO);
    }

    #[test]
    fn test_discount_requires_items() {
        let mut carts = CartBook::new();
        carts.get_or_create(1);
        let err = carts.apply_discount(1, Decimal::from(10)).unwrap_err();
        assert_eq!(err, StoreError::EmptyCart { customer: 1 });
    }

    #[test]
    fn test_clear() {
        let mut carts = CartBook::new();
        carts.add_item(1, &laptop(5), 1).unwrap();
        carts.apply_discount(1, Decimal::from(20)).unwrap();

        carts.clear(1).unwrap();
        let cart = carts.get(1).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.discount, Decimal::ZERO);

        assert_eq!(carts.clear(1).unwrap_err(), StoreError::EmptyCart { customer: 1 });
    }

    #[test]
    fn test_totals_without_cart() {
        let carts = CartBook::new();
        let totals = carts.totals(9).unwrap();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.discounted_total, Decimal::ZERO);
    }
}
