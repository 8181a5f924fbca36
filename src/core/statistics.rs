//! Store statistics
//!
//! Pure read-only aggregation over the store components. An empty store
//! reports zeros rather than failing; the only error is a total stock value
//! too large to represent.

use crate::core::cart_book::CartBook;
use crate::core::catalog::Catalog;
use crate::core::customer_directory::CustomerDirectory;
use crate::core::order_book::{OrderBook, StatusCounts};
use crate::types::cart::checked_sum;
use crate::types::StoreError;
use rust_decimal::Decimal;

/// Snapshot of store-wide counters
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStatistics {
    /// Every product ever added, active or not
    pub total_products: usize,
    pub active_products: usize,
    /// Sum of stock × price over active products
    pub stock_value: Decimal,
    pub customers: usize,
    pub orders: usize,
    pub orders_by_status: StatusCounts,
    /// Carts holding at least one item
    pub active_carts: usize,
}

impl StoreStatistics {
    pub fn gather(
        catalog: &Catalog,
        customers: &CustomerDirectory,
        carts: &CartBook,
        orders: &OrderBook,
    ) -> Result<Self, StoreError> {
        let active: Vec<_> = catalog.all().filter(|product| product.active).collect();
        let stock_value = checked_sum(
            active.iter().map(|product| product.stock_value()),
            "Stock value",
        )?;

        Ok(StoreStatistics {
            total_products: catalog.all().count(),
            active_products: active.len(),
            stock_value,
            customers: customers.len(),
            orders: orders.len(),
            orders_by_status: orders.status_counts(),
            active_carts: carts.non_empty_count(),
        })
    }
}
