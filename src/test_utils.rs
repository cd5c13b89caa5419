//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{item, item::ItemKey, ledger},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::create_tables(&db).await?;
    Ok(db)
}

/// Builds an item key with default size "L" and an empty category.
pub fn test_key(name: &str) -> ItemKey {
    ItemKey::new(name, "L", "")
}

/// Registers a test item with a zero low-stock threshold.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::item::Model> {
    item::add_item(db, &test_key(name), 0).await
}

/// Registers a test item and stocks it to the given quantity.
pub async fn setup_stocked_item(
    db: &DatabaseConnection,
    name: &str,
    quantity: i64,
) -> Result<entities::item::Model> {
    let key = test_key(name);
    ledger::stock_in(db, &key, quantity, 0, "test stock").await?;
    item::require_item(db, &key).await
}
