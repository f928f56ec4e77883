//! # Order Lifecycle Demo
//!
//! Demonstrates the full order lifecycle: build, price, validate, persist.
//!
//! ## Usage
//! ```bash
//! # Run with defaults (./tally_demo.db, ./orders/)
//! cargo run -p tally-store --bin demo
//!
//! # Specify database path and JSON output directory
//! cargo run -p tally-store --bin demo -- --db ./data/tally.db --out ./data/orders
//! ```
//!
//! ## Scenarios
//! - Basic order: one electronic item and one non-electronic item
//! - Empty order: no items, all totals zero
//! - Multiple electronics: tariff accumulates across items
//! - Zero-quantity item: contributes nothing to any total
//! - Incomplete customer: rejected with a diagnostic, never persisted

use std::env;

use tracing_subscriber::EnvFilter;

use tally_core::{LineItem, Order, OrderProcessor};
use tally_store::{Database, DbConfig, JsonStore, OrderStore, SaveTarget};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = "./tally_demo.db".to_string();
    let mut out_dir = "./orders".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tally Orders Demo");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tally_demo.db)");
                println!("  -o, --out <DIR>    JSON output directory (default: ./orders)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tally Orders Demo");
    println!("=================");
    println!("Database: {}", db_path);
    println!("JSON out: {}", out_dir);
    println!();

    // Connect to storage
    let db = Database::new(DbConfig::new(&db_path)).await?;
    let store = OrderStore::new(db, JsonStore::new(&out_dir));
    println!("✓ Connected to database, migrations applied");
    println!();

    let processor = OrderProcessor::new();

    // Scenario 1: Basic order with one electronic and one non-electronic item
    let mut order = Order::new(1001, "John Doe", "123-456-7890");
    order.add_item(LineItem::new(1001, 1, "ELECT001", "42 Inch TV", 300.0, 1));
    order.add_item(LineItem::new(1001, 2, "OTHER001", "Office Chair", 100.0, 2));
    run_scenario("Basic Order", &processor, &mut order);

    // Persist the basic order to both targets
    for target in ["Database", "JSON"] {
        let target: SaveTarget = target.parse()?;
        store.save(&order, target).await?;
        println!("  ✓ Saved order {} to {}", order.order_number, target);
    }
    println!();

    // Scenario 2: Order with no items
    let mut order = Order::new(1002, "Jane Smith", "987-654-3210");
    run_scenario("Empty Order", &processor, &mut order);
    println!();

    // Scenario 3: Order with multiple electronic items
    let mut order = Order::new(1003, "Alice Johnson", "555-123-4567");
    order.add_item(LineItem::new(1003, 1, "ELECT001", "Laptop", 800.0, 1));
    order.add_item(LineItem::new(1003, 2, "ELECT002", "Smartphone", 500.0, 1));
    run_scenario("Multiple Electronics", &processor, &mut order);
    println!();

    // Scenario 4: Order with a zero-quantity item
    let mut order = Order::new(1004, "Bob Brown", "444-567-8901");
    order.add_item(LineItem::new(1004, 1, "ELECT003", "Headphones", 150.0, 0));
    run_scenario("Zero Quantity Item", &processor, &mut order);
    println!();

    // Scenario 5: Missing customer details fail validation with a diagnostic
    let mut order = Order::new(1005, "", "222-333-4444");
    order.add_item(LineItem::new(1005, 1, "OTHER002", "Desk Lamp", 25.0, 1));
    run_scenario("Missing Customer Name", &processor, &mut order);
    println!();

    println!("All scenarios completed.");
    Ok(())
}

/// Processes one order and prints its outcome and totals.
fn run_scenario(label: &str, processor: &OrderProcessor, order: &mut Order) {
    println!("Scenario: {}", label);

    let outcome = processor.process(order);

    println!("  Subtotal: {:.2}", order.subtotal());
    println!("  Tax:      {:.2}", order.tax_amount);
    println!("  Tariff:   {:.2}", order.tariff_amount);
    println!("  Total:    {:.2}", order.total_amount);

    match outcome.diagnostic() {
        None => println!("  ✓ Order processed successfully"),
        Some(diagnostic) => println!("  ✗ {}", diagnostic),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
