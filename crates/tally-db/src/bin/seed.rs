//! # Seed Data Generator
//!
//! Populates the database with demo customers and products, then exercises
//! the order engine end to end (create + append) and prints the resulting
//! orders with their recomputed totals.
//!
//! ## Usage
//! ```bash
//! cargo run -p tally-db --bin seed
//! cargo run -p tally-db --bin seed -- --db ./data/tally.db
//! ```

use std::env;

use tally_core::{LineItemRequest, Money, NewCustomer};
use tally_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Demo catalog: (name, unit price in cents).
const PRODUCTS: &[(&str, i64)] = &[
    ("Espresso Beans 1kg", 1250),
    ("Pour-Over Kettle", 3499),
    ("Ceramic Mug", 899),
    ("Paper Filters 100ct", 333),
    ("Cold Brew Bottle", 1599),
    ("Burr Grinder", 7995),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./tally_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tally Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tally_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tally Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("Connected, migrations applied");

    if db.products().count().await? > 0 {
        println!("Database already has products; skipping seed.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    // Register the catalog
    let mut product_ids = Vec::new();
    for (name, cents) in PRODUCTS {
        let product = db.products().insert(name, Money::from_cents(*cents)).await?;
        product_ids.push(product.product_id);
    }
    println!("Inserted {} products", product_ids.len());

    // Exercise the engine: one order per demo customer, then an append
    let engine = db.engine();

    let first = engine
        .create_order(
            &NewCustomer::named("Jane Doe"),
            &[
                LineItemRequest {
                    product_id: product_ids[0],
                    quantity: 2,
                },
                LineItemRequest {
                    product_id: product_ids[3],
                    quantity: 3,
                },
            ],
            None,
        )
        .await?;
    println!(
        "Created order {} for customer {} (total {})",
        first.order_id, first.customer_id, first.total
    );

    let second = engine
        .create_order(
            &NewCustomer {
                name: "John Smith".to_string(),
                national_id: None,
                email: Some("john@example.com".to_string()),
            },
            &[LineItemRequest {
                product_id: product_ids[5],
                quantity: 1,
            }],
            None,
        )
        .await?;
    println!(
        "Created order {} for customer {} (total {})",
        second.order_id, second.customer_id, second.total
    );

    let appended = engine
        .append_item(first.order_id, product_ids[2], 2)
        .await?;
    println!(
        "Appended item {} to order {} (new total {})",
        appended.item_id, first.order_id, appended.new_total
    );

    // Audit: stored totals vs. recomputed item sums
    println!();
    println!("Orders:");
    for order in db.orders().list().await? {
        let recomputed = db.orders().items_total(order.order_id).await?;
        println!(
            "  #{} {} - stored {} / recomputed {}",
            order.order_id,
            order.customer_name,
            Money::from_cents(order.total_amount_cents),
            recomputed
        );
    }

    println!();
    println!("Seed complete");

    Ok(())
}
