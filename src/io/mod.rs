//! I/O module
//!
//! Handles everything that crosses the process boundary.
//!
//! # Components
//!
//! - `prompt` - Typed line prompts over any reader/writer pair
//! - `report` - Plain-text rendering of products, carts, orders and statistics
//! - `seed` - Catalog seeding from a CSV file

pub mod prompt;
pub mod report;
pub mod seed;

pub use prompt::{InputError, Prompter};
pub use seed::{seed_catalog, SeedReader, SeedSummary};
