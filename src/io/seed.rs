//! Catalog seeding from CSV
//!
//! Reads product rows from a CSV file with the header
//! `name,description,price,category,stock` and adds them to a store's
//! catalog at startup. Nothing is ever written back.
//!
//! # Error Handling
//!
//! - Failing to open the file is fatal and returned from `SeedReader::new()`
//! - A malformed row, or one the catalog rejects, is reported with its line
//!   number and skipped; the remaining rows are still loaded

use crate::core::Store;
use crate::types::NewProduct;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Raw CSV row, before numeric parsing
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

/// Convert a raw row into catalog input
///
/// Only parses numbers. Range checks (positive price, non-negative stock,
/// non-blank name) are left to the catalog so seeded and interactive
/// products follow the same rules.
pub fn convert_csv_product(row: CsvProduct) -> Result<NewProduct, String> {
    let price = Decimal::from_str(row.price.trim())
        .map_err(|_| format!("Invalid price '{}' for product '{}'", row.price, row.name))?;
    let stock = row
        .stock
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Invalid stock '{}' for product '{}'", row.stock, row.name))?;

    Ok(NewProduct {
        name: row.name,
        description: row.description,
        price,
        category: row.category,
        stock,
    })
}

/// Streaming reader over seed rows
///
/// Yields one `Result` per data row; errors carry the file line number.
#[derive(Debug)]
pub struct SeedReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SeedReader {
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open seed file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SeedReader {
    type Item = Result<(usize, NewProduct), String>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.reader.deserialize::<CsvProduct>().next()?;
        self.line_num += 1;
        let line = self.line_num;

        Some(match row {
            Ok(row) => convert_csv_product(row)
                .map(|product| (line, product))
                .map_err(|e| format!("Line {}: {}", line, e)),
            Err(e) => Err(format!("Line {}: CSV parse error: {}", line, e)),
        })
    }
}

/// Outcome of seeding a catalog
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedSummary {
    pub loaded: usize,
    /// One message per skipped row
    pub skipped: Vec<String>,
}

/// Add every valid row of a seed file to the store's catalog
pub fn seed_catalog(store: &mut Store, path: &Path) -> Result<SeedSummary, String> {
    let mut summary = SeedSummary::default();

    for row in SeedReader::new(path)? {
        let outcome = row.and_then(|(line, product)| {
            store
                .add_product(product)
                .map(|_| ())
                .map_err(|e| format!("Line {}: {}", line, e))
        });
        match outcome {
            Ok(()) => summary.loaded += 1,
            Err(message) => {
                warn!(path = %path.display(), "skipping seed row: {}", message);
                summary.skipped.push(message);
            }
        }
    }

    info!(
        path = %path.display(),
        loaded = summary.loaded,
        skipped = summary.skipped.len(),
        "catalog seeded"
    );
    Ok(summary)
}
