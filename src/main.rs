//! Rust Store Engine CLI
//!
//! Interactive console for managing an in-memory online store.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --store-name Gadgets --shipping-cost 99.90
//! cargo run -- --seed catalog.csv
//! RUST_LOG=info cargo run -- --seed catalog.csv
//! ```
//!
//! The program reads menu choices and answers from stdin and prints menus
//! and results to stdout. Logs go to stderr (level from `RUST_LOG`, default
//! `warn`). All data is lost when the session ends.
//!
//! # Exit Codes
//!
//! - 0: Success (the user exited or stdin was closed)
//! - 1: Error (seed file not readable, console I/O failure)

use rust_store_engine::cli::{self, Console};
use rust_store_engine::core::Store;
use rust_store_engine::io::seed_catalog;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();
    let mut store = Store::new(args.to_store_config());

    if let Some(path) = &args.seed {
        match seed_catalog(&mut store, path) {
            Ok(summary) => {
                for message in &summary.skipped {
                    eprintln!("Skipped: {}", message);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let stdin = io::stdin();
    let mut console = Console::new(store, stdin.lock(), io::stdout());
    if let Err(e) = console.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
