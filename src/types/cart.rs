//! Cart-related types for the store engine
//!
//! A cart holds value snapshots of catalog entries: the product name and
//! unit price are copied at add-time and never re-read from the catalog, so
//! later catalog edits do not change what the customer is about to pay.
//!
//! All money arithmetic is checked. A cart never accepts a line that would
//! make its quantities or totals overflow, so pricing an existing cart only
//! fails if its fields were edited directly.

use super::order::OrderItem;
use super::{CustomerId, ProductId, StoreError};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A line in a customer's cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: ProductId,

    /// Product name at the time of the first add
    pub name: String,

    /// Unit price at the time of the first add
    pub unit_price: Decimal,

    pub quantity: i64,
}

impl CartItem {
    /// Unit price × quantity
    pub fn line_total(&self) -> Result<Decimal, StoreError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| StoreError::amount_overflow("Line total"))
    }
}

/// Sum amounts, failing with `AmountOverflow` instead of wrapping
pub(crate) fn checked_sum<I>(amounts: I, what: &str) -> Result<Decimal, StoreError>
where
    I: IntoIterator<Item = Result<Decimal, StoreError>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |sum, amount| {
        sum.checked_add(amount?)
            .ok_or_else(|| StoreError::amount_overflow(what))
    })
}

/// A customer's shopping cart
///
/// Items are keyed by product so repeated adds of the same product
/// accumulate into one line. Iteration order is by product identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub customer: CustomerId,

    pub items: BTreeMap<ProductId, CartItem>,

    /// Discount percentage in [0, 50]
    pub discount: Decimal,
}

/// Computed cart amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals
    pub subtotal: Decimal,

    /// Discount percentage applied to the subtotal
    pub discount_percent: Decimal,

    /// subtotal × (1 − discount / 100)
    pub discounted_total: Decimal,
}

impl Cart {
    /// Create an empty cart with no discount
    pub fn new(customer: CustomerId) -> Self {
        Cart {
            customer,
            items: BTreeMap::new(),
            discount: Decimal::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a snapshot line, or accumulate quantity onto an existing line
    ///
    /// When the product is already in the cart the first name and price
    /// snapshot are kept; only the quantity grows.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the accumulated quantity, the line total or
    /// the cart subtotal would overflow. The cart is unchanged on error.
    pub fn add(&mut self, item: CartItem) -> Result<(), StoreError> {
        let product = item.product;
        let merged = match self.items.get(&product) {
            Some(existing) => CartItem {
                quantity: existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or_else(|| StoreError::amount_overflow("Cart quantity"))?,
                ..existing.clone()
            },
            None => item,
        };

        let others = self
            .items
            .values()
            .filter(|line| line.product != product)
            .map(CartItem::line_total);
        checked_sum(others.chain([merged.line_total()]), "Cart subtotal")?;

        self.items.insert(product, merged);
        Ok(())
    }

    /// Remove a line, returning it if it was present
    pub fn remove(&mut self, product: ProductId) -> Option<CartItem> {
        self.items.remove(&product)
    }

    /// Drop all lines and reset the discount
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = Decimal::ZERO;
    }

    /// Sum of line totals
    pub fn subtotal(&self) -> Result<Decimal, StoreError> {
        checked_sum(self.items.values().map(CartItem::line_total), "Cart subtotal")
    }

    /// Subtotal, discount and discounted total
    pub fn totals(&self) -> Result<CartTotals, StoreError> {
        let subtotal = self.subtotal()?;
        let discount = subtotal
            .checked_mul(self.discount / Decimal::ONE_HUNDRED)
            .ok_or_else(|| StoreError::amount_overflow("Discount"))?;

        Ok(CartTotals {
            subtotal,
            discount_percent: self.discount,
            discounted_total: subtotal - discount,
        })
    }

    /// Lines in product order with their totals computed
    pub fn priced_items(&self) -> Result<Vec<OrderItem>, StoreError> {
        self.items.values().map(OrderItem::try_from).collect()
    }
}
