//! Console rendering of store data
//!
//! All functions write plain text lines to a writer and never touch the
//! store. Money is shown with two decimal places (midpoint away from zero)
//! while the underlying values stay exact.

use crate::core::StoreStatistics;
use crate::types::{CartTotals, Customer, Order, OrderItem, OrderQuote, Product, StoreError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

/// Format used for order timestamps
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render an amount with exactly two decimal places
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Render a percentage without trailing zeros (`10`, `12.5`)
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", percent.normalize())
}

pub fn write_product_line(out: &mut dyn Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "ID: {} | {} | {} | Category: {} | In stock: {}",
        product.id,
        product.name,
        format_money(product.price),
        product.category,
        product.stock
    )
}

pub fn write_product_detail(out: &mut dyn Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "ID: {} | {} | {} | Category: {} | Description: {} | In stock: {}",
        product.id,
        product.name,
        format_money(product.price),
        product.category,
        product.description,
        product.stock
    )
}

pub fn write_customer_line(out: &mut dyn Write, customer: &Customer) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} | Phone: {} | Email: {} | Address: {}",
        customer.id, customer.name, customer.phone, customer.email, customer.address
    )
}

/// Render a cart from its priced lines and totals
///
/// See `Cart::priced_items` and `Cart::totals`.
pub fn write_cart(
    out: &mut dyn Write,
    owner: &str,
    items: &[OrderItem],
    totals: &CartTotals,
) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "Cart is empty.");
    }

    writeln!(out, "--- Cart of {} ---", owner)?;
    for item in items {
        writeln!(
            out,
            "{}. {} x{} - {}",
            item.product,
            item.name,
            item.quantity,
            format_money(item.line_total)
        )?;
    }

    writeln!(out, "Subtotal: {}", format_money(totals.subtotal))?;
    writeln!(out, "Discount: {}", format_percent(totals.discount_percent))?;
    writeln!(out, "Total: {}", format_money(totals.discounted_total))
}

/// Render the price breakdown shown before an order is confirmed
pub fn write_quote(out: &mut dyn Write, quote: &OrderQuote) -> io::Result<()> {
    writeln!(out, "--- Checkout ---")?;
    writeln!(out, "Subtotal: {}", format_money(quote.subtotal))?;
    writeln!(
        out,
        "Discount: {} ({})",
        format_money(quote.discount),
        format_percent(quote.discount_percent)
    )?;
    writeln!(out, "Shipping: {}", format_money(quote.shipping))?;
    writeln!(out, "Total due: {}", format_money(quote.total))
}

pub fn write_order_line(out: &mut dyn Write, order: &Order) -> io::Result<()> {
    writeln!(
        out,
        "Order #{} | Customer #{} | Status: {} | Total: {} | Date: {}",
        order.id,
        order.customer,
        order.status,
        format_money(order.total),
        order.created_at.format(DATE_FORMAT)
    )
}

pub fn write_statistics(out: &mut dyn Write, stats: &StoreStatistics) -> io::Result<()> {
    writeln!(out, "=== Store statistics ===")?;
    writeln!(out, "Products: {}", stats.total_products)?;
    writeln!(out, "Active products: {}", stats.active_products)?;
    writeln!(out, "Stock value: {}", format_money(stats.stock_value))?;
    writeln!(out, "Customers: {}", stats.customers)?;
    writeln!(out, "Orders: {}", stats.orders)?;
    writeln!(out, " - pending: {}", stats.orders_by_status.pending)?;
    writeln!(out, " - completed: {}", stats.orders_by_status.completed)?;
    writeln!(out, " - cancelled: {}", stats.orders_by_status.cancelled)?;
    writeln!(out, "Active carts: {}", stats.active_carts)
}

/// Render a rejected operation
///
/// Contact rejections list every reason on its own line.
pub fn write_error(out: &mut dyn Write, error: &StoreError) -> io::Result<()> {
    match error {
        StoreError::InvalidContact { field, reasons } => {
            writeln!(out, "Error: invalid {}:", field)?;
            for reason in reasons {
                writeln!(out, "- {}", reason)?;
            }
            Ok(())
        }
        other => writeln!(out, "Error: {}", other),
    }
}
