//! Command-line interface definitions using Clap.
//!
//! Each subcommand is a 1:1 wrapper over one core operation; no business rules
//! live here. Exit codes map directly to success or the typed error kinds.

use clap::{Parser, Subcommand};

/// Uniform and gear inventory tracking for a security firm
#[derive(Debug, Parser)]
#[command(name = "uniform-inventory")]
#[command(version, about = "Track uniforms and gear issued to employees")]
pub struct Cli {
    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize the database schema (safe to run repeatedly)
    Init,

    /// Register a uniform style or update its minimum-stock threshold
    AddItem {
        /// Style name, e.g. "Duty Shirt"
        name: String,
        /// Size designation
        #[arg(long, default_value = "")]
        size: String,
        /// Grouping such as "summer" or "equipment"
        #[arg(long, default_value = "")]
        category: String,
        /// Low-stock alert threshold
        #[arg(long = "min-stock", default_value_t = 0)]
        min_stock: i64,
    },

    /// Register an employee
    AddEmployee {
        /// Employee name
        name: String,
        /// Job role
        #[arg(long, default_value = "")]
        role: String,
        /// Badge number (unique; re-registering a badge updates name/role)
        #[arg(long)]
        badge: Option<String>,
    },

    /// Receive stock into the warehouse (creates the item on first reference)
    StockIn {
        /// Style name
        name: String,
        /// Size designation
        #[arg(long, default_value = "")]
        size: String,
        /// Grouping category
        #[arg(long, default_value = "")]
        category: String,
        /// Number of units received (positive)
        #[arg(long)]
        quantity: i64,
        /// Low-stock threshold to apply if the item is new
        #[arg(long = "min-stock", default_value_t = 0)]
        min_stock: i64,
        /// Free-text note for the ledger
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Issue stock to an employee
    Issue {
        /// Style name
        name: String,
        /// Size designation
        #[arg(long, default_value = "")]
        size: String,
        /// Grouping category
        #[arg(long, default_value = "")]
        category: String,
        /// Receiving employee (created on first reference)
        #[arg(long = "to")]
        employee: String,
        /// Number of units issued (positive)
        #[arg(long)]
        quantity: i64,
        /// Free-text note for the ledger
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Receive stock back from an employee
    Return {
        /// Style name
        name: String,
        /// Size designation
        #[arg(long, default_value = "")]
        size: String,
        /// Grouping category
        #[arg(long, default_value = "")]
        category: String,
        /// Returning employee (created on first reference)
        #[arg(long = "from")]
        employee: String,
        /// Number of units returned (positive)
        #[arg(long)]
        quantity: i64,
        /// Free-text note for the ledger
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Record a stocktake correction with a signed quantity
    Adjust {
        /// Style name
        name: String,
        /// Size designation
        #[arg(long, default_value = "")]
        size: String,
        /// Grouping category
        #[arg(long, default_value = "")]
        category: String,
        /// Signed correction, e.g. -3 for shrinkage (nonzero)
        #[arg(long, allow_hyphen_values = true)]
        quantity: i64,
        /// Free-text note for the ledger
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Show current balances and low-stock alerts for every item
    Status,

    /// List ledger entries, oldest first
    History {
        /// Only entries whose item name contains this substring
        #[arg(long, conflicts_with = "employee")]
        name: Option<String>,
        /// Only entries whose employee name contains this substring
        #[arg(long)]
        employee: Option<String>,
    },
}
