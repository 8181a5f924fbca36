use crate::config::{ShippingPolicy, StoreConfig};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Interactive console for an in-memory online store
#[derive(Parser, Debug)]
#[command(name = "store-console")]
#[command(about = "Manage products, customers, carts and orders of an online store", long_about = None)]
pub struct CliArgs {
    /// Name shown in the main menu banner
    #[arg(
        long = "store-name",
        value_name = "NAME",
        help = "Store name shown in the main menu (default: TechStore)"
    )]
    pub store_name: Option<String>,

    /// Fixed shipping fee added to every order
    #[arg(
        long = "shipping-cost",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Shipping cost added to each order (default: 150.00)"
    )]
    pub shipping_cost: Option<Decimal>,

    /// Shipping method recorded on every order
    #[arg(
        long = "shipping-method",
        value_name = "METHOD",
        help = "Shipping method recorded on orders (default: Standard delivery)"
    )]
    pub shipping_method: Option<String>,

    /// CSV file with products to load at startup
    #[arg(
        long = "seed",
        value_name = "CSV",
        help = "Path to a CSV file (name,description,price,category,stock) to seed the catalog"
    )]
    pub seed: Option<PathBuf>,
}

impl CliArgs {
    /// Create a StoreConfig from CLI arguments
    ///
    /// Missing values take their defaults; unusable ones fall back to the
    /// default with a warning.
    pub fn to_store_config(&self) -> StoreConfig {
        if self.store_name.is_none() && self.shipping_cost.is_none() && self.shipping_method.is_none()
        {
            return StoreConfig::default();
        }

        let default = StoreConfig::default();
        let ShippingPolicy { cost, method } = default.shipping;
        StoreConfig::new(
            self.store_name.as_deref().unwrap_or(&default.name),
            self.shipping_cost.unwrap_or(cost),
            self.shipping_method.as_deref().unwrap_or(&method),
        )
    }
}
