//! Command-line entrypoint for the uniform inventory system.
//!
//! The commands cover the day-to-day flows for a security company: stocking
//! uniforms into the warehouse, issuing them to guards, receiving returns or
//! exchanges, recording stocktake corrections, and tracking shortages via
//! minimum-stock alerts. Every subcommand is a thin wrapper over one core
//! operation; errors print as a single line and exit nonzero.

use clap::Parser;
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;
use uniform_inventory::{
    cli::{Cli, Commands},
    config,
    core::{
        employee,
        history::{self, HistoryFilter},
        item::{self, ItemKey},
        ledger, status,
    },
    errors::Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Environment variables may also be set externally
    dotenv().ok();

    let cli = Cli::parse();

    let url = config::database_url();
    let db = config::init_db(&url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    let outcome = run(&db, cli.command).await;

    // Release the underlying connection before reporting the outcome.
    db.close().await.map_err(uniform_inventory::errors::Error::from)?;

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
    Ok(())
}

async fn run(db: &DatabaseConnection, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            // Schema creation already ran on connect; this just confirms it.
            println!("Database initialized: {}", config::database_url());
        }
        Commands::AddItem {
            name,
            size,
            category,
            min_stock,
        } => {
            let item = item::add_item(db, &ItemKey::new(name, size, category), min_stock).await?;
            println!(
                "Registered item #{}: {} {} {} (min stock {})",
                item.id, item.name, item.size, item.category, item.min_stock
            );
        }
        Commands::AddEmployee { name, role, badge } => {
            let emp = employee::add_employee(db, &name, &role, badge).await?;
            println!("Registered employee #{}: {} ({})", emp.id, emp.name, emp.role);
        }
        Commands::StockIn {
            name,
            size,
            category,
            quantity,
            min_stock,
            note,
        } => {
            let key = ItemKey::new(name, size, category);
            ledger::stock_in(db, &key, quantity, min_stock, &note).await?;
            println!("Stocked in {quantity} x {key}");
        }
        Commands::Issue {
            name,
            size,
            category,
            employee,
            quantity,
            note,
        } => {
            let key = ItemKey::new(name, size, category);
            ledger::issue(db, &key, &employee, quantity, &note).await?;
            println!("Issued {quantity} x {key} to {employee}");
        }
        Commands::Return {
            name,
            size,
            category,
            employee,
            quantity,
            note,
        } => {
            let key = ItemKey::new(name, size, category);
            ledger::return_stock(db, &key, &employee, quantity, &note).await?;
            println!("Received {quantity} x {key} back from {employee}");
        }
        Commands::Adjust {
            name,
            size,
            category,
            quantity,
            note,
        } => {
            let key = ItemKey::new(name, size, category);
            ledger::adjust(db, &key, quantity, &note).await?;
            println!("Adjusted {key} by {quantity}");
        }
        Commands::Status => {
            let rows = status::status(db).await?;
            let headers = ["item", "size", "category", "quantity", "min stock", "alert"];
            let body: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.item.name.clone(),
                        r.item.size.clone(),
                        r.item.category.clone(),
                        r.balance.to_string(),
                        r.item.min_stock.to_string(),
                        if r.is_low { "LOW".to_string() } else { String::new() },
                    ]
                })
                .collect();
            print_table(&headers, &body);
        }
        Commands::History { name, employee } => {
            let filter = match (name, employee) {
                (Some(n), None) => HistoryFilter::ItemName(n),
                (None, Some(e)) => HistoryFilter::Employee(e),
                // clap rejects both being set
                _ => HistoryFilter::All,
            };
            let entries = history::history(db, &filter).await?;
            let headers = ["when", "kind", "item", "size", "employee", "qty", "note"];
            let body: Vec<Vec<String>> = entries
                .iter()
                .map(|e| {
                    vec![
                        e.transaction
                            .created_at
                            .format("%Y-%m-%d %H:%M:%S")
                            .to_string(),
                        e.transaction.kind.clone(),
                        e.item.name.clone(),
                        e.item.size.clone(),
                        e.employee
                            .as_ref()
                            .map(|emp| emp.name.clone())
                            .unwrap_or_default(),
                        e.transaction.quantity.to_string(),
                        e.transaction.note.clone(),
                    ]
                })
                .collect();
            print_table(&headers, &body);
        }
    }
    Ok(())
}

/// Prints rows as aligned columns with a header rule.
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("no records");
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{header_line}");
    println!("{}", "-".repeat(header_line.len()));

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}
