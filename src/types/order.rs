//! Order-related types for the store engine
//!
//! Orders are immutable snapshots of a cart at checkout time. Only the
//! status and the update timestamp change after creation.

use super::cart::{Cart, CartItem};
use super::{CustomerId, OrderId, ProductId, StoreError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order
///
/// Orders start as `Pending`. `Completed` and `Cancelled` close an order,
/// but the order book still accepts a change away from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in display order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the order has been closed, successfully or not
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StoreError;

    /// Parse a status name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| StoreError::invalid_status(s))
    }
}

/// Immutable line of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    /// unit_price × quantity
    pub line_total: Decimal,
}

impl TryFrom<&CartItem> for OrderItem {
    type Error = StoreError;

    fn try_from(item: &CartItem) -> Result<Self, Self::Error> {
        Ok(OrderItem {
            product: item.product,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total()?,
        })
    }
}

/// Shipping record embedded in an order
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingInfo {
    /// Customer address at checkout time
    pub address: String,
    pub method: String,
    pub cost: Decimal,
    /// Carrier tracking code, unset until the parcel is handed over
    pub tracking_code: Option<String>,
}

/// Priced checkout proposal for a cart
///
/// Built without touching any state, shown to the customer, and turned into
/// an [`Order`] only after explicit confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuote {
    pub customer: CustomerId,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    /// subtotal × discount_percent / 100
    pub discount: Decimal,
    pub shipping: Decimal,
    /// subtotal − discount + shipping
    pub total: Decimal,
}

impl OrderQuote {
    /// Price a cart with a fixed shipping fee
    ///
    /// Fails with `AmountOverflow` when the total due does not fit the money
    /// range.
    pub fn for_cart(cart: &Cart, shipping: Decimal) -> Result<Self, StoreError> {
        let items = cart.priced_items()?;
        let totals = cart.totals()?;
        let total = totals
            .discounted_total
            .checked_add(shipping)
            .ok_or_else(|| StoreError::amount_overflow("Order total"))?;

        Ok(OrderQuote {
            customer: cart.customer,
            items,
            subtotal: totals.subtotal,
            discount_percent: totals.discount_percent,
            discount: totals.subtotal - totals.discounted_total,
            shipping,
            total,
        })
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerId,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub shipping_to: ShippingInfo,
}

impl Order {
    /// Freeze a confirmed quote into a pending order
    pub fn from_quote(
        id: OrderId,
        quote: OrderQuote,
        shipping_to: ShippingInfo,
        now: DateTime<Utc>,
    ) -> Self {
        Order {
            id,
            customer: quote.customer,
            items: quote.items,
            subtotal: quote.subtotal,
            discount: quote.discount,
            shipping: quote.shipping,
            total: quote.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            shipping_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pending", OrderStatus::Pending)]
    #[case("COMPLETED", OrderStatus::Completed)]
    #[case("  Cancelled ", OrderStatus::Cancelled)]
    fn test_parse_status(#[case] input: &str, #[case] expected: OrderStatus) {
        assert_eq!(input.parse::<OrderStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case::advertised_but_unsupported("shipped")]
    #[case::american_spelling("canceled")]
    #[case::empty("")]
    fn test_parse_status_rejects_unknown(#[case] input: &str) {
        let err = input.parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidStatus { .. }));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_quote_for_cart() {
        let mut cart = Cart::new(7);
        cart.add(CartItem {
            product: 1,
            name: "Laptop".to_string(),
            unit_price: Decimal::from(100),
            quantity: 3,
        })
        .unwrap();
        cart.discount = Decimal::from(10);

        let quote = OrderQuote::for_cart(&cart, Decimal::from(150)).unwrap();
        assert_eq!(quote.customer, 7);
        assert_eq!(quote.subtotal, Decimal::from(300));
        assert_eq!(quote.discount, Decimal::from(30));
        assert_eq!(quote.total, Decimal::from(420));
        assert_eq!(quote.items[0].line_total, Decimal::from(300));
    }

    #[test]
    fn test_quote_total_overflow() {
        let mut cart = Cart::new(7);
        cart.add(CartItem {
            product: 1,
            name: "Gold bar".to_string(),
            unit_price: Decimal::MAX,
            quantity: 1,
        })
        .unwrap();

        let err = OrderQuote::for_cart(&cart, Decimal::from(150)).unwrap_err();
        assert_eq!(err, StoreError::amount_overflow("Order total"));
    }
}
