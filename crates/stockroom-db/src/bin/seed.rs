//! # Seed Data Generator
//!
//! Populates an empty database with sample phones and accessories.
//!
//! ## Usage
//! ```bash
//! # Seed ./inventory.db with the full catalogue
//! cargo run -p stockroom-db --bin seed
//!
//! # Limit how many records of each kind are inserted
//! cargo run -p stockroom-db --bin seed -- --count 5
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! Prices are in KES. Seeding is skipped for a resource type that already
//! has records.

use std::env;
use std::time::Instant;

use stockroom_core::{Accessory, NewStockItem, Phone};
use stockroom_db::{Database, DbConfig, DbResult, StoredRecord};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// (model, price, quantity)
const PHONES: &[(&str, f64, i64)] = &[
    ("Samsung Galaxy A15", 18_500.0, 12),
    ("Samsung Galaxy S24", 112_000.0, 3),
    ("Tecno Spark 20", 15_999.0, 20),
    ("Tecno Camon 30", 27_500.0, 8),
    ("Infinix Hot 40i", 13_200.0, 15),
    ("Infinix Note 40", 24_999.0, 6),
    ("Redmi Note 13", 24_999.99, 10),
    ("iPhone 13", 79_000.0, 2),
    ("iPhone 15", 125_000.0, 1),
    ("Nokia 105", 2_499.0, 30),
    ("Oppo A18", 14_500.0, 9),
    ("Google Pixel 8", 70_000.0, 2),
];

/// (name, price, quantity)
const ACCESSORIES: &[(&str, f64, i64)] = &[
    ("USB-C Cable 1m", 350.0, 60),
    ("Lightning Cable 1m", 450.0, 25),
    ("20W Fast Charger", 1_200.0, 18),
    ("Car Charger", 800.0, 10),
    ("Silicone Case", 500.0, 40),
    ("Tempered Glass Protector", 250.0, 100),
    ("Wireless Earbuds", 2_500.0, 12),
    ("Bluetooth Speaker", 3_800.0, 5),
    ("Power Bank 10000mAh", 2_200.0, 14),
    ("Memory Card 64GB", 900.0, 22),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = usize::MAX;
    let mut db_path = String::from("./inventory.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                info!("Usage: seed [--count <N>] [--db <PATH>]");
                info!("  -c, --count <N>    Records of each kind to insert (default: all)");
                info!("  -d, --db <PATH>    Database file path (default: ./inventory.db)");
                return Ok(());
            }
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(db = %db_path, "Seeding inventory");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let start = Instant::now();

    let phones = seed::<Phone>(&db, PHONES, count).await?;
    let accessories = seed::<Accessory>(&db, ACCESSORIES, count).await?;

    let summary = db.summary().compute().await?;

    info!(
        phones,
        accessories,
        elapsed = ?start.elapsed(),
        stock_value = %summary.grand_total_display(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// Inserts up to `count` catalogue entries unless the table already has data.
async fn seed<R: StoredRecord>(
    db: &Database,
    catalogue: &[(&str, f64, i64)],
    count: usize,
) -> DbResult<usize> {
    let repo = db.stock::<R>();
    let table = R::KIND.table();

    let existing = repo.count().await?;
    if existing > 0 {
        warn!(table, existing, "Table already has records, skipping");
        return Ok(0);
    }

    let mut inserted = 0;
    for (label, price, quantity) in catalogue.iter().take(count) {
        repo.insert(NewStockItem {
            label: (*label).to_string(),
            price: *price,
            quantity: *quantity,
        })
        .await?;
        inserted += 1;
    }

    info!(table, inserted, "Seeded table");
    Ok(inserted)
}
