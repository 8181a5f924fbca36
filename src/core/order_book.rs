//! Order storage and lifecycle
//!
//! This module provides the `OrderBook` component that keeps every placed
//! order in creation order and manages status transitions.
//!
//! # Identifiers
//!
//! Order identifiers come from a counter owned by the book, independent of
//! how many orders are stored, so they stay unique even if orders are ever
//! removed.
//!
//! # Status transitions
//!
//! Any order may be set to any supported status, including the one it
//! already has. Moving a completed or cancelled order elsewhere is allowed
//! and logged as a warning.

use crate::core::traits::{Clock, SystemClock};
use crate::types::{
    CustomerId, Order, OrderId, OrderQuote, OrderStatus, ShippingInfo, StoreError,
};
use tracing::{info, warn};

/// Order counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Owns every placed order
#[derive(Debug)]
pub struct OrderBook {
    orders: Vec<Order>,
    last_id: OrderId,
    clock: Box<dyn Clock>,
}

impl OrderBook {
    /// Create an empty order book stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        OrderBook {
            orders: Vec::new(),
            last_id: 0,
            clock,
        }
    }

    /// Turn a confirmed quote into a pending order
    ///
    /// Assigns the next identifier and stamps creation and update times.
    pub fn place(&mut self, quote: OrderQuote, shipping_to: ShippingInfo) -> &Order {
        self.last_id += 1;
        let order = Order::from_quote(self.last_id, quote, shipping_to, self.clock.now());

        info!(
            order = order.id,
            customer = order.customer,
            total = %order.total,
            "order created"
        );
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Change an order's status and refresh its update timestamp
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if the order does not exist. Unsupported
    /// status names are rejected earlier, when parsing `OrderStatus`.
    pub fn update_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<&Order, StoreError> {
        let now = self.clock.now();
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(StoreError::OrderNotFound { order: id })?;

        let previous = order.status;
        if previous.is_terminal() && previous != status {
            warn!(order = id, from = %previous, to = %status, "reopening closed order");
        }
        order.status = status;
        order.updated_at = now;

        info!(order = id, from = %previous, to = %status, "order status changed");
        Ok(order)
    }

    /// All orders in creation order
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Orders placed by one customer, in creation order
    pub fn for_customer(&self, customer: CustomerId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.customer == customer)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Count orders in each status
    pub fn status_counts(&self) -> StatusCounts {
        self.orders
            .iter()
            .fold(StatusCounts::default(), |mut counts, order| {
                match order.status {
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Completed => counts.completed += 1,
                    OrderStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            })
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderItem;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::cell::Cell;

    /// Clock that advances one minute on every read
    #[derive(Debug)]
    struct TickingClock {
        ticks: Cell<i64>,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let tick = self.ticks.get();
            self.ticks.set(tick + 1);
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(tick)
        }
    }

    fn book() -> OrderBook {
        OrderBook::with_clock(Box::new(TickingClock {
            ticks: Cell::new(0),
        }))
    }

    fn quote(customer: CustomerId) -> OrderQuote {
        OrderQuote {
            customer,
            items: vec![OrderItem {
                product: 1,
                name: "Laptop".to_string(),
                unit_price: Decimal::from(100),
                quantity: 3,
                line_total: Decimal::from(300),
            }],
            subtotal: Decimal::from(300),
            discount_percent: Decimal::from(10),
            discount: Decimal::from(30),
            shipping: Decimal::from(150),
            total: Decimal::from(420),
        }
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            address: "Kyiv".to_string(),
            method: "Standard delivery".to_string(),
            cost: Decimal::from(150),
            tracking_code: None,
        }
    }

    #[test]
    fn test_place_assigns_increasing_ids() {
        let mut orders = book();
        let ids: Vec<OrderId> = (0..3).map(|_| orders.place(quote(1), shipping()).id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_placed_order_is_pending_snapshot() {
        let mut orders = book();
        let order = orders.place(quote(1), shipping());

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::from(420));
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.shipping_to.address, "Kyiv");
    }

    #[test]
    fn test_update_status_refreshes_timestamp() {
        let mut orders = book();
        let created = orders.place(quote(1), shipping()).created_at;

        let order = orders.update_status(1, OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.updated_at > created);
        assert_eq!(order.created_at, created);
    }

    #[test]
    fn test_pending_may_be_set_again() {
        let mut orders = book();
        orders.place(quote(1), shipping());
        assert!(orders.update_status(1, OrderStatus::Pending).is_ok());
    }

    #[rstest]
    #[case(OrderStatus::Completed, OrderStatus::Pending)]
    #[case(OrderStatus::Completed, OrderStatus::Cancelled)]
    #[case(OrderStatus::Cancelled, OrderStatus::Pending)]
    #[case(OrderStatus::Cancelled, OrderStatus::Cancelled)]
    fn test_closed_order_can_change_status(
        #[case] closed: OrderStatus,
        #[case] next: OrderStatus,
    ) {
        let mut orders = book();
        orders.place(quote(1), shipping());
        let closed_at = orders.update_status(1, closed).unwrap().updated_at;

        let order = orders.update_status(1, next).unwrap();
        assert_eq!(order.status, next);
        assert!(order.updated_at > closed_at);
        assert_eq!(orders.status_counts().pending, usize::from(next == OrderStatus::Pending));
    }

    #[test]
    fn test_update_unknown_order() {
        let mut orders = book();
        let err = orders.update_status(5, OrderStatus::Completed).unwrap_err();
        assert_eq!(err, StoreError::OrderNotFound { order: 5 });
    }

    #[test]
    fn test_for_customer_and_counts() {
        let mut orders = book();
        orders.place(quote(1), shipping());
        orders.place(quote(2), shipping());
        orders.place(quote(1), shipping());
        orders.update_status(3, OrderStatus::Cancelled).unwrap();

        let ids: Vec<OrderId> = orders.for_customer(1).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(orders.for_customer(9).is_empty());
        assert_eq!(
            orders.status_counts(),
            StatusCounts {
                pending: 2,
                completed: 0,
                cancelled: 1,
            }
        );
    }
}
