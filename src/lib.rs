//! Rust Store Engine Library
//! # Overview
//!
//! This library provides an in-memory online store: a product catalog, a
//! customer directory, one shopping cart per customer and an order book,
//! driven by a menu-based console.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, Customer, Cart, Order, etc.)
//! - [`config`] - Store name and shipping policy
//! - [`validation`] - Phone and email rules for customer contact data
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Aggregate orchestrating every operation
//!   - [`core::catalog`] - Products with soft deletion
//!   - [`core::customer_directory`] - Customer registration and updates
//!   - [`core::cart_book`] - Carts, quantities and discounts
//!   - [`core::order_book`] - Orders and their status lifecycle
//!   - [`core::statistics`] - Store-wide counters
//! - [`io`] - Console prompts, text rendering and CSV catalog seeding
//! - [`cli`] - CLI arguments parsing and the interactive console
//!
//! # Checkout
//!
//! Converting a cart into an order prices it as:
//!
//! - **Subtotal**: sum of unit price × quantity over the cart lines
//! - **Discount**: subtotal × percent / 100, with percent in [0, 50]
//! - **Total**: subtotal − discount + shipping cost
//!
//! All money arithmetic is checked. Amounts too large to represent are
//! rejected with `StoreError::AmountOverflow`.
//!
//! The order freezes these values along with the cart lines. Later catalog
//! edits never change an existing order, and checkout does not consume stock.
//!
//! # Order States
//!
//! - `pending`: initial state
//! - `completed`, `cancelled`: closed states
//!
//! Any order may be moved to any of these states.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod types;
pub mod validation;

pub use config::{ShippingPolicy, StoreConfig};
pub use crate::core::{Catalog, CartBook, CustomerDirectory, OrderBook, Store, StoreStatistics};
pub use types::{
    Cart, CartItem, Customer, CustomerId, ErrorKind, Order, OrderId, OrderStatus, Product,
    ProductId, StoreError,
};
