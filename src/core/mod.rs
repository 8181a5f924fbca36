//! Core business logic module
//!
//! This module contains the store components:
//! - `traits` - Abstractions over boundary collaborators (contact validation, clock)
//! - `catalog` - Product catalog with soft deletion
//! - `customer_directory` - Customer registration and contact updates
//! - `cart_book` - One shopping cart per customer
//! - `order_book` - Placed orders and their status lifecycle
//! - `statistics` - Read-only store summary
//! - `store` - The aggregate orchestrating all of the above

pub mod cart_book;
pub mod catalog;
pub mod customer_directory;
pub mod order_book;
pub mod statistics;
pub mod store;
pub mod traits;

pub use cart_book::{CartBook, MAX_DISCOUNT_PERCENT};
pub use catalog::Catalog;
pub use customer_directory::CustomerDirectory;
pub use order_book::{OrderBook, StatusCounts};
pub use statistics::StoreStatistics;
pub use store::Store;
pub use traits::{Clock, ContactValidator, SystemClock};
