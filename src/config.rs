//! Database configuration and schema management.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` so the database schema is
//! generated from the entity definitions, plus one explicit composite unique
//! index covering the item identity tuple (name, size, category) that the
//! per-column derive attributes cannot express. Everything here is idempotent:
//! running `init` against an existing store is safe and loses no data.

use crate::entities::{Employee, Item, ItemColumn, Transaction};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Default store location when `DATABASE_URL` is not set. `mode=rwc` lets
/// SQLite create the file on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";

/// Resolves the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the store and ensures the schema exists.
///
/// This is the `init` entry point shared by every command: connecting,
/// enabling foreign-key enforcement, and creating any missing tables/indexes.
pub async fn init_db(url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection to: {}", url);
    let db = Database::connect(url).await?;

    // SQLite does not enforce foreign keys unless asked to.
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    create_tables(&db).await?;
    Ok(db)
}

/// Creates all tables and indexes if they do not already exist.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut items = schema.create_table_from_entity(Item);
    items.if_not_exists();
    db.execute(builder.build(&items)).await?;

    let mut employees = schema.create_table_from_entity(Employee);
    employees.if_not_exists();
    db.execute(builder.build(&employees)).await?;

    let mut transactions = schema.create_table_from_entity(Transaction);
    transactions.if_not_exists();
    db.execute(builder.build(&transactions)).await?;

    // Item identity is the (name, size, category) tuple.
    let item_identity = Index::create()
        .name("idx_items_name_size_category")
        .table(Item)
        .col(ItemColumn::Name)
        .col(ItemColumn::Size)
        .col(ItemColumn::Category)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&item_identity)).await?;

    info!("Database tables ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EmployeeModel, ItemModel, TransactionModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<ItemModel> = Item::find().limit(1).all(&db).await?;
        let _: Vec<EmployeeModel> = Employee::find().limit(1).all(&db).await?;
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let item = crate::core::item::add_item(
            &db,
            &crate::core::item::ItemKey::new("Duty Shirt", "L", "summer"),
            5,
        )
        .await?;

        // Running schema creation again must neither fail nor lose data.
        create_tables(&db).await?;

        let still_there = Item::find_by_id(item.id).one(&db).await?;
        assert_eq!(still_there, Some(item));

        Ok(())
    }

    #[tokio::test]
    async fn test_database_url_default() {
        // Only meaningful when the variable is absent; don't mutate the
        // environment from a test.
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(database_url(), DEFAULT_DATABASE_URL);
        }
    }
}
