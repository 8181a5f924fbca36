//! Benchmark suite for the cart-to-order pipeline
//!
//! Measures filling carts and converting them into orders using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each benchmark builds a fresh store with a fixed catalog and customer
//! base, so only the store operations are measured.

use rust_decimal::Decimal;
use rust_store_engine::core::Store;
use rust_store_engine::types::{NewCustomer, NewProduct, OrderStatus};

fn main() {
    divan::main();
}

const PRODUCTS: u32 = 100;
const CUSTOMERS: u32 = 50;

fn seeded_store() -> Store {
    let mut store = Store::default();
    for i in 1..=PRODUCTS {
        store
            .add_product(NewProduct {
                name: format!("Product {}", i),
                description: String::new(),
                price: Decimal::new(i64::from(i) * 1999, 2),
                category: format!("Category {}", i % 5),
                stock: 1_000,
            })
            .expect("Failed to add product");
    }
    for i in 1..=CUSTOMERS {
        store
            .register_customer(NewCustomer {
                name: format!("Customer {}", i),
                phone: format!("+38050{:07}", i),
                email: format!("customer{}@example.com", i),
                address: "Kyiv".to_string(),
            })
            .expect("Failed to register customer");
    }
    store
}

/// Fill every customer's cart with `lines` products and check out
#[divan::bench(args = [1, 10, 50])]
fn checkout_all_customers(bencher: divan::Bencher, lines: u32) {
    bencher.with_inputs(seeded_store).bench_local_values(|mut store| {
        for customer in 1..=CUSTOMERS {
            for product in 1..=lines {
                store
                    .add_to_cart(customer, product, 2)
                    .expect("Failed to add to cart");
            }
            store
                .apply_discount(customer, Decimal::from(10))
                .expect("Failed to apply discount");
            store
                .create_order_from_cart(customer, |_| true)
                .expect("Checkout failed");
        }
        store
    });
}

/// Price carts repeatedly without placing orders
#[divan::bench]
fn quote_full_carts(bencher: divan::Bencher) {
    let mut store = seeded_store();
    for customer in 1..=CUSTOMERS {
        for product in 1..=PRODUCTS {
            store
                .add_to_cart(customer, product, 1)
                .expect("Failed to add to cart");
        }
    }

    bencher.bench_local(|| {
        for customer in 1..=CUSTOMERS {
            divan::black_box(store.quote_order(customer).expect("Quote failed"));
        }
    });
}

/// Gather statistics over a store with many orders in mixed states
#[divan::bench]
fn statistics_after_checkout(bencher: divan::Bencher) {
    let mut store = seeded_store();
    for customer in 1..=CUSTOMERS {
        store
            .add_to_cart(customer, customer, 1)
            .expect("Failed to add to cart");
        store
            .create_order_from_cart(customer, |_| true)
            .expect("Checkout failed");
        if customer % 2 == 0 {
            store
                .update_order_status(customer, OrderStatus::Completed)
                .expect("Failed to update status");
        }
    }

    bencher.bench_local(|| divan::black_box(store.statistics()));
}
