//! Store aggregate
//!
//! This module provides the `Store` that owns the catalog, the customer
//! directory, the carts and the orders, and orchestrates operations that
//! span more than one of them.
//!
//! The store enforces cross-component rules such as:
//! - Carts only exist for registered customers
//! - Cart lines snapshot active catalog products
//! - Checkout is all-or-nothing and requires explicit confirmation
//!
//! Every operation either succeeds completely or returns an error with the
//! store left exactly as it was.

use crate::config::StoreConfig;
use crate::core::cart_book::CartBook;
use crate::core::catalog::Catalog;
use crate::core::customer_directory::CustomerDirectory;
use crate::core::order_book::OrderBook;
use crate::core::statistics::StoreStatistics;
use crate::types::{
    Cart, CartItem, CartTotals, Customer, CustomerId, CustomerUpdate, NewCustomer, NewProduct,
    Order, OrderId, OrderQuote, OrderStatus, Product, ProductId, ProductUpdate, ShippingInfo,
    StoreError,
};
use rust_decimal::Decimal;
use tracing::debug;

/// In-memory store aggregate
///
/// Single owner of all store state. Callers are expected to be synchronous
/// and single-threaded; wrap the whole store in one mutex if it ever needs to
/// be shared.
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    catalog: Catalog,
    customers: CustomerDirectory,
    carts: CartBook,
    orders: OrderBook,
}

impl Store {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self::from_parts(config, CustomerDirectory::new(), OrderBook::new())
    }

    /// Create an empty store with custom collaborators
    ///
    /// Lets callers inject their own contact validator (through the
    /// directory) or clock (through the order book).
    pub fn from_parts(config: StoreConfig, customers: CustomerDirectory, orders: OrderBook) -> Self {
        Store {
            config,
            catalog: Catalog::new(),
            customers,
            carts: CartBook::new(),
            orders,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn carts(&self) -> &CartBook {
        &self.carts
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    // Catalog

    pub fn add_product(&mut self, input: NewProduct) -> Result<&Product, StoreError> {
        self.catalog.add(input)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<&Product, StoreError> {
        self.catalog.update(id, update)
    }

    pub fn deactivate_product(&mut self, id: ProductId) -> Result<&Product, StoreError> {
        self.catalog.deactivate(id)
    }

    // Customers

    pub fn register_customer(&mut self, input: NewCustomer) -> Result<&Customer, StoreError> {
        self.customers.register(input)
    }

    pub fn update_customer(
        &mut self,
        id: CustomerId,
        update: &CustomerUpdate,
    ) -> Result<&Customer, StoreError> {
        self.customers.update(id, update)
    }

    // Carts

    /// Get a registered customer's cart, creating it on first access
    pub fn cart(&mut self, customer: CustomerId) -> Result<&Cart, StoreError> {
        self.customers.require(customer)?;
        Ok(self.carts.get_or_create(customer))
    }

    /// Add a quantity of a catalog product to a customer's cart
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer is not registered
    /// - The product is missing or inactive
    /// - The quantity is not positive or exceeds current stock
    pub fn add_to_cart(
        &mut self,
        customer: CustomerId,
        product: ProductId,
        quantity: i64,
    ) -> Result<&Cart, StoreError> {
        self.customers.require(customer)?;
        let product = self.catalog.require(product)?;
        self.carts.add_item(customer, product, quantity)
    }

    pub fn remove_from_cart(
        &mut self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<CartItem, StoreError> {
        self.customers.require(customer)?;
        self.carts.remove_item(customer, product)
    }

    pub fn apply_discount(
        &mut self,
        customer: CustomerId,
        percent: Decimal,
    ) -> Result<&Cart, StoreError> {
        self.customers.require(customer)?;
        self.carts.apply_discount(customer, percent)
    }

    pub fn clear_cart(&mut self, customer: CustomerId) -> Result<(), StoreError> {
        self.customers.require(customer)?;
        self.carts.clear(customer)
    }

    pub fn cart_totals(&self, customer: CustomerId) -> Result<CartTotals, StoreError> {
        self.customers.require(customer)?;
        self.carts.totals(customer)
    }

    // Orders

    /// Price a customer's cart for checkout without changing anything
    pub fn quote_order(&self, customer: CustomerId) -> Result<OrderQuote, StoreError> {
        self.customers.require(customer)?;
        let cart = self.carts.require_non_empty(customer)?;
        OrderQuote::for_cart(cart, self.config.shipping.cost)
    }

    /// Convert a customer's cart into an order
    ///
    /// The priced quote is passed to `confirm`; the order is only created
    /// when it returns `true`. On confirmation the cart items are frozen into
    /// the order, the customer's current address is copied into the shipping
    /// record, and the cart is emptied. Catalog stock is not touched.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(order))` - The order was created
    /// * `Ok(None)` - The customer declined; cart and orders are unchanged
    /// * `Err(StoreError)` - Unknown customer, empty cart or a total too large
    ///   to represent
    pub fn create_order_from_cart<F>(
        &mut self,
        customer: CustomerId,
        confirm: F,
    ) -> Result<Option<&Order>, StoreError>
    where
        F: FnOnce(&OrderQuote) -> bool,
    {
        let quote = self.quote_order(customer)?;
        if !confirm(&quote) {
            debug!(customer, "checkout declined");
            return Ok(None);
        }

        let shipping_to = ShippingInfo {
            address: self.customers.require(customer)?.address.clone(),
            method: self.config.shipping.method.clone(),
            cost: quote.shipping,
            tracking_code: None,
        };

        self.carts.reset(customer);
        Ok(Some(self.orders.place(quote, shipping_to)))
    }

    /// Change the status of an order
    ///
    /// Any supported status is accepted, also for completed or cancelled
    /// orders.
    pub fn update_order_status(
        &mut self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<&Order, StoreError> {
        self.orders.update_status(order, status)
    }

    /// Read-only summary of the whole store
    pub fn statistics(&self) -> Result<StoreStatistics, StoreError> {
        StoreStatistics::gather(&self.catalog, &self.customers, &self.carts, &self.orders)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
