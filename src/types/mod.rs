//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Catalog entries
//! - `customer`: Registered customers
//! - `cart`: Shopping carts and their line items
//! - `order`: Orders, order items, statuses and shipping records
//! - `error`: Error types for the store engine

pub mod cart;
pub mod customer;
pub mod error;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem, CartTotals};
pub use customer::{Customer, CustomerUpdate, NewCustomer};
pub use error::{ErrorKind, StoreError};
pub use order::{Order, OrderItem, OrderQuote, OrderStatus, ShippingInfo};
pub use product::{NewProduct, Product, ProductUpdate};

/// Product identifier
///
/// Assigned sequentially starting at 1 and never reused.
pub type ProductId = u32;

/// Customer identifier
///
/// Assigned sequentially starting at 1 and never reused.
pub type CustomerId = u32;

/// Order identifier
///
/// Strictly increasing by 1 for each created order, starting at 1.
pub type OrderId = u32;
