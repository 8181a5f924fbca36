//! Store configuration
//!
//! Runtime settings for a store session: the display name and the shipping
//! policy applied to every order. Values come from CLI flags and fall back to
//! defaults (with a warning) when they are unusable.

use rust_decimal::Decimal;
use tracing::warn;

/// Shipping policy applied at checkout
#[derive(Clone, Debug, PartialEq)]
pub struct ShippingPolicy {
    /// Fixed fee added to every order
    pub cost: Decimal,
    /// Method label copied into each order's shipping record
    pub method: String,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            cost: Decimal::new(15000, 2),
            method: "Standard delivery".to_string(),
        }
    }
}

/// Configuration for a store session
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Name shown in the main menu banner
    pub name: String,
    pub shipping: ShippingPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "TechStore".to_string(),
            shipping: ShippingPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Create a StoreConfig with custom values
    ///
    /// A blank name or method, or a negative shipping cost, is replaced by
    /// the default value.
    pub fn new(name: &str, shipping_cost: Decimal, shipping_method: &str) -> Self {
        let default = Self::default();

        let name = if name.trim().is_empty() {
            warn!(default = %default.name, "blank store name, using default");
            default.name
        } else {
            name.trim().to_string()
        };

        let cost = if shipping_cost < Decimal::ZERO {
            warn!(
                cost = %shipping_cost,
                default = %default.shipping.cost,
                "negative shipping cost, using default"
            );
            default.shipping.cost
        } else {
            shipping_cost
        };

        let method = if shipping_method.trim().is_empty() {
            warn!(default = %default.shipping.method, "blank shipping method, using default");
            default.shipping.method
        } else {
            shipping_method.trim().to_string()
        };

        Self {
            name,
            shipping: ShippingPolicy { cost, method },
        }
    }
}
