//! Error types for the store engine
//!
//! This module defines all error types that can occur while operating on the
//! store. Errors are designed to be descriptive and user-friendly for console
//! output.
//!
//! # Error Categories
//!
//! - **Validation**: bad or missing input, out-of-range numbers, amounts too
//!   large to represent, rejected contact fields
//! - **NotFound**: unknown product, customer, order or cart line
//! - **StateConflict**: the store's current state forbids the operation
//!
//! Every error is recoverable: the failing operation leaves the store exactly
//! as it was before the call.

use super::{CustomerId, OrderId, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Category of a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StateConflict,
}

/// Main error type for the store engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A required text field was blank
    #[error("{field} is required")]
    RequiredField {
        /// Name of the missing field
        field: String,
    },

    /// Product price must be strictly positive
    #[error("Invalid price {price}: price must be greater than 0")]
    InvalidPrice { price: Decimal },

    /// Stock level must not be negative
    #[error("Invalid stock {stock}: stock cannot be negative")]
    InvalidStock { stock: i64 },

    /// Requested quantity must be strictly positive
    #[error("Invalid quantity {quantity}: quantity must be greater than 0")]
    InvalidQuantity { quantity: i64 },

    /// Discount percentage outside the allowed range
    #[error("Discount {percent}% is out of range: must be between 0 and {max}%")]
    DiscountOutOfRange { percent: Decimal, max: Decimal },

    /// A contact field (phone or email) failed validation
    ///
    /// Carries every human-readable reason, in the order they were found.
    #[error("Invalid {field}: {}", reasons.join("; "))]
    InvalidContact { field: String, reasons: Vec<String> },

    /// A money amount or quantity does not fit the numeric range
    #[error("{what} is too large")]
    AmountOverflow { what: String },

    /// Order status outside the supported set
    #[error("Unknown order status '{status}': expected pending, completed or cancelled")]
    InvalidStatus { status: String },

    /// Product does not exist or has been deactivated
    #[error("Product {product} not found")]
    ProductNotFound { product: ProductId },

    #[error("Customer {customer} not found")]
    CustomerNotFound { customer: CustomerId },

    #[error("Order {order} not found")]
    OrderNotFound { order: OrderId },

    /// Product is not in the customer's cart
    #[error("Product {product} is not in the cart of customer {customer}")]
    CartItemNotFound {
        customer: CustomerId,
        product: ProductId,
    },

    /// Requested quantity exceeds catalog stock
    #[error("Insufficient stock for product {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: ProductId,
        available: i64,
        requested: i64,
    },

    /// Operation requires a non-empty cart
    #[error("Cart of customer {customer} is empty")]
    EmptyCart { customer: CustomerId },
}

impl StoreError {
    /// Taxonomy category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::RequiredField { .. }
            | StoreError::InvalidPrice { .. }
            | StoreError::InvalidStock { .. }
            | StoreError::InvalidQuantity { .. }
            | StoreError::AmountOverflow { .. }
            | StoreError::InvalidContact { .. }
            | StoreError::InvalidStatus { .. } => ErrorKind::Validation,
            StoreError::ProductNotFound { .. }
            | StoreError::CustomerNotFound { .. }
            | StoreError::OrderNotFound { .. }
            | StoreError::CartItemNotFound { .. } => ErrorKind::NotFound,
            StoreError::InsufficientStock { .. }
            | StoreError::EmptyCart { .. }
            | StoreError::DiscountOutOfRange { .. } => ErrorKind::StateConflict,
        }
    }
}

// Helper functions for creating common errors

impl StoreError {
    /// Create a RequiredField error
    pub fn required(field: &str) -> Self {
        StoreError::RequiredField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidContact error
    pub fn invalid_contact(field: &str, reasons: Vec<String>) -> Self {
        StoreError::InvalidContact {
            field: field.to_string(),
            reasons,
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(status: &str) -> Self {
        StoreError::InvalidStatus {
            status: status.to_string(),
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(product: ProductId, available: i64, requested: i64) -> Self {
        StoreError::InsufficientStock {
            product,
            available,
            requested,
        }
    }

    /// Create a CartItemNotFound error
    pub fn cart_item_not_found(customer: CustomerId, product: ProductId) -> Self {
        StoreError::CartItemNotFound { customer, product }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(what: &str) -> Self {
        StoreError::AmountOverflow {
            what: what.to_string(),
        }
    }
}
